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

use blobsas_core::time::{now, parse_rfc3339, DateTime};
use blobsas_core::utils::Redact;
use blobsas_core::{Error, Result, SigningCredential};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// User delegation key returned by the storage control plane.
///
/// `value` is the base64 encoded HMAC key, everything else is echoed into the
/// string-to-sign and the token.
#[derive(Clone, Default)]
pub struct DelegationKey {
    /// Object id of the identity the key was issued to, `skoid`.
    pub signed_object_id: String,
    /// Tenant id of that identity, `sktid`.
    pub signed_tenant_id: String,
    /// Start of the key validity, `skt`.
    pub signed_starts_on: Option<DateTime>,
    /// End of the key validity, `ske`.
    pub signed_expires_on: Option<DateTime>,
    /// Service the key is valid for, `sks`.
    pub signed_service: String,
    /// REST version used to obtain the key, `skv`.
    pub signed_version: String,
    /// Base64 encoded key material.
    pub value: String,
}

impl Debug for DelegationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegationKey")
            .field("signed_object_id", &self.signed_object_id)
            .field("signed_tenant_id", &self.signed_tenant_id)
            .field("signed_starts_on", &self.signed_starts_on)
            .field("signed_expires_on", &self.signed_expires_on)
            .field("signed_service", &self.signed_service)
            .field("signed_version", &self.signed_version)
            .field("value", &Redact::from(&self.value))
            .finish()
    }
}

impl SigningCredential for DelegationKey {
    fn is_valid(&self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        // Take 20s as buffer to avoid edge cases.
        match self.signed_expires_on {
            Some(expires) => {
                expires > now() + chrono::TimeDelta::try_seconds(20).expect("in bounds")
            }
            None => true,
        }
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct UserDelegationKeyXml {
    signed_oid: String,
    signed_tid: String,
    signed_start: String,
    signed_expiry: String,
    signed_service: String,
    signed_version: String,
    value: String,
}

impl DelegationKey {
    /// Parse the `UserDelegationKey` document returned by the
    /// `Get User Delegation Key` operation.
    ///
    /// ```text
    /// <UserDelegationKey>
    ///   <SignedOid>..</SignedOid>
    ///   <SignedTid>..</SignedTid>
    ///   <SignedStart>2024-01-01T00:00:00Z</SignedStart>
    ///   <SignedExpiry>2024-01-02T00:00:00Z</SignedExpiry>
    ///   <SignedService>b</SignedService>
    ///   <SignedVersion>2020-08-04</SignedVersion>
    ///   <Value>..</Value>
    /// </UserDelegationKey>
    /// ```
    pub fn from_xml(content: &str) -> Result<Self> {
        let xml: UserDelegationKeyXml = quick_xml::de::from_str(content).map_err(|e| {
            Error::credential_invalid("failed to parse user delegation key").with_source(e)
        })?;

        if xml.value.is_empty() {
            return Err(Error::credential_invalid(
                "user delegation key has no value",
            ));
        }

        let time = |v: &str| -> Result<Option<DateTime>> {
            if v.is_empty() {
                return Ok(None);
            }
            parse_rfc3339(v).map(Some).map_err(|e| {
                Error::credential_invalid("user delegation key has invalid time").with_source(e)
            })
        };

        Ok(Self {
            signed_starts_on: time(&xml.signed_start)?,
            signed_expires_on: time(&xml.signed_expiry)?,
            signed_object_id: xml.signed_oid,
            signed_tenant_id: xml.signed_tid,
            signed_service: xml.signed_service,
            signed_version: xml.signed_version,
            value: xml.value,
        })
    }
}
