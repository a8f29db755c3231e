// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use async_trait::async_trait;
use blobsas_core::hash::base64_decode;
use blobsas_core::time::format_sas_time_opt;
use blobsas_core::{Context, Error, ErrorKind, Result, SignRequest};
use http::request::Parts;
use http::uri::PathAndQuery;
use log::debug;

use crate::config::Config;
use crate::constants::*;
use crate::credential::DelegationKey;
use crate::request::SasRequest;
use crate::resource::canonical_name;

/// RequestSigner builds user delegation SAS tokens for one storage account.
///
/// It holds no mutable state, a single instance can be shared by any number
/// of concurrent callers.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    account_name: String,
}

impl RequestSigner {
    /// Create a signer for `account_name`.
    pub fn new(account_name: impl Into<String>) -> Result<Self> {
        let account_name = account_name.into();
        if account_name.trim().is_empty() {
            return Err(Error::config_invalid("account name is required"));
        }

        Ok(Self { account_name })
    }

    /// Create a signer from [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.account_name.as_deref() {
            Some(v) => Self::new(v),
            None => Err(Error::config_invalid("account name is required")),
        }
    }

    /// The account tokens are issued for.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Build the SAS token for `req` signed with `key`.
    ///
    /// The returned string has no leading `?`. Either a complete token is
    /// returned or an error, a token without signature is never exposed.
    pub async fn build_token(
        &self,
        ctx: &Context,
        req: &SasRequest,
        key: &DelegationKey,
    ) -> Result<String> {
        let string_to_sign = string_to_sign(&self.account_name, req, key);
        debug!("calculated string to sign: {string_to_sign:?}");

        let key_bytes = base64_decode(&key.value).map_err(|e| {
            Error::signing_failed("failed to decode user delegation key").with_source(e)
        })?;

        let signature = ctx
            .sign_message(&string_to_sign, &key_bytes)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::SigningFailed => e,
                _ => Error::signing_failed("signing provider failed").with_source(e),
            })?;
        if signature.is_empty() {
            return Err(Error::signing_failed("signing provider returned empty signature"));
        }
        base64_decode(&signature).map_err(|e| {
            Error::signing_failed("signing provider returned malformed signature").with_source(e)
        })?;

        Ok(query_string(req, key, &signature))
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = DelegationKey;
    type Request = SasRequest;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
    ) -> Result<String> {
        let Some(key) = credential else {
            return Err(Error::credential_invalid("user delegation key is required"));
        };

        self.build_token(ctx, req, key).await
    }
}

/// Construct the string to sign of a user delegation SAS.
///
/// ## Format
///
/// ```text
/// signedPermissions + "\n" +
/// signedStart + "\n" +
/// signedExpiry + "\n" +
/// canonicalizedResource + "\n" +
/// signedKeyObjectId + "\n" +
/// signedKeyTenantId + "\n" +
/// signedKeyStart + "\n" +
/// signedKeyExpiry  + "\n" +
/// signedKeyService + "\n" +
/// signedKeyVersion + "\n" +
/// signedAuthorizedUserObjectId + "\n" +
/// signedUnauthorizedUserObjectId + "\n" +
/// signedCorrelationId + "\n" +
/// signedIP + "\n" +
/// signedProtocol + "\n" +
/// signedVersion + "\n" +
/// signedResource + "\n" +
/// signedSnapshotTime + "\n" +
/// rscc + "\n" +
/// rscd + "\n" +
/// rsce + "\n" +
/// rscl + "\n" +
/// rsct
/// ```
///
/// The unauthorized user object id is never set.
///
/// ## Reference
///
/// - [Create a user delegation SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-user-delegation-sas#construct-a-user-delegation-signature)
fn string_to_sign(account_name: &str, req: &SasRequest, key: &DelegationKey) -> String {
    let resource = canonical_name(
        account_name,
        req.container_name().unwrap_or_default(),
        req.blob_name().unwrap_or_default(),
    );
    let ip_range = req.ip_range().map(|v| v.to_string()).unwrap_or_default();
    let starts_on = format_sas_time_opt(req.starts_on());
    let expires_on = format_sas_time_opt(req.expires_on());
    let key_starts_on = format_sas_time_opt(key.signed_starts_on);
    let key_expires_on = format_sas_time_opt(key.signed_expires_on);

    let fields: [&str; 23] = [
        req.permissions().unwrap_or_default(),
        &starts_on,
        &expires_on,
        &resource,
        &key.signed_object_id,
        &key.signed_tenant_id,
        &key_starts_on,
        &key_expires_on,
        &key.signed_service,
        &key.signed_version,
        req.preauthorized_agent_object_id().unwrap_or_default(),
        "",
        req.correlation_id().unwrap_or_default(),
        &ip_range,
        req.protocol().as_str().unwrap_or_default(),
        req.version(),
        req.resource().as_str(),
        req.snapshot_id()
            .or(req.blob_version_id())
            .unwrap_or_default(),
        req.cache_control().unwrap_or_default(),
        req.content_disposition().unwrap_or_default(),
        req.content_encoding().unwrap_or_default(),
        req.content_language().unwrap_or_default(),
        req.content_type().unwrap_or_default(),
    ];
    // Blank values are signed as empty lines, matching what the query omits.
    fields
        .map(|v| if is_blank(v) { "" } else { v })
        .join("\n")
}

fn is_blank(v: &str) -> bool {
    v.trim().is_empty()
}

/// Assemble the token parameters in the order the service documents them.
///
/// Blank values are skipped. Times, response overrides, ids chosen by the
/// caller and the signature are form-urlencoded.
fn query_string(req: &SasRequest, key: &DelegationKey, signature: &str) -> String {
    let mut elements: Vec<(&'static str, String)> = Vec::with_capacity(22);
    let mut push = |k: &'static str, v: &str, encode: bool| {
        if is_blank(v) {
            return;
        }
        let v = if encode { urlencoded(v) } else { v.to_string() };
        elements.push((k, v));
    };

    push(SAS_KEY_OBJECT_ID, &key.signed_object_id, false);
    push(SAS_KEY_TENANT_ID, &key.signed_tenant_id, false);
    push(SAS_KEY_START, &format_sas_time_opt(key.signed_starts_on), true);
    push(SAS_KEY_EXPIRY, &format_sas_time_opt(key.signed_expires_on), true);
    push(SAS_KEY_SERVICE, &key.signed_service, false);
    push(SAS_KEY_VERSION, &key.signed_version, false);
    push(SAS_VERSION, req.version(), false);
    push(
        SAS_PROTOCOL,
        req.protocol().as_str().unwrap_or_default(),
        false,
    );
    push(SAS_START_TIME, &format_sas_time_opt(req.starts_on()), true);
    push(SAS_EXPIRY_TIME, &format_sas_time_opt(req.expires_on()), true);
    push(
        SAS_IP_RANGE,
        &req.ip_range().map(|v| v.to_string()).unwrap_or_default(),
        false,
    );
    push(SAS_IDENTIFIER, req.identifier().unwrap_or_default(), false);
    push(SAS_RESOURCE, req.resource().as_str(), false);
    push(SAS_PERMISSIONS, req.permissions().unwrap_or_default(), false);
    push(SAS_CACHE_CONTROL, req.cache_control().unwrap_or_default(), true);
    push(
        SAS_CONTENT_DISPOSITION,
        req.content_disposition().unwrap_or_default(),
        true,
    );
    push(
        SAS_CONTENT_ENCODING,
        req.content_encoding().unwrap_or_default(),
        true,
    );
    push(
        SAS_CONTENT_LANGUAGE,
        req.content_language().unwrap_or_default(),
        true,
    );
    push(SAS_CONTENT_TYPE, req.content_type().unwrap_or_default(), true);
    push(
        SAS_PREAUTHORIZED_AGENT_OBJECT_ID,
        req.preauthorized_agent_object_id().unwrap_or_default(),
        true,
    );
    push(SAS_CORRELATION_ID, req.correlation_id().unwrap_or_default(), true);
    push(SAS_SIGNATURE, signature, true);

    elements
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn urlencoded(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Append a SAS token to the query of `parts.uri`.
///
/// An existing query is kept and the token is joined with `&`. A leading `?`
/// on the token is ignored.
pub fn apply_sas_token(parts: &mut Parts, token: &str) -> Result<()> {
    let token = token.trim_start_matches('?');
    if token.is_empty() {
        return Err(Error::request_invalid("SAS token is empty"));
    }

    let mut uri_parts = parts.uri.clone().into_parts();
    let path = uri_parts
        .path_and_query
        .as_ref()
        .map(|v| v.path())
        .unwrap_or("/");
    let query = match uri_parts.path_and_query.as_ref().and_then(|v| v.query()) {
        Some(q) if !q.is_empty() => format!("{q}&{token}"),
        _ => token.to_string(),
    };

    uri_parts.path_and_query = Some(PathAndQuery::from_maybe_shared(format!("{path}?{query}"))?);
    parts.uri = http::Uri::from_parts(uri_parts)?;

    Ok(())
}
