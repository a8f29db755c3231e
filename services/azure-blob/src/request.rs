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

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use blobsas_core::time::DateTime;
use blobsas_core::{Error, Result};

use crate::constants::DEFAULT_SAS_VERSION;
use crate::resource::SasResource;

/// Specifies the protocol permitted for a request made with the SAS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SasProtocol {
    /// No restriction, `spr` is omitted.
    #[default]
    Unrestricted,
    /// `https`
    HttpsOnly,
    /// `https,http`
    HttpsOrHttp,
}

impl SasProtocol {
    /// The signed value of this protocol, `None` for unrestricted.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            SasProtocol::Unrestricted => None,
            SasProtocol::HttpsOnly => Some("https"),
            SasProtocol::HttpsOrHttp => Some("https,http"),
        }
    }
}

/// An IP address or an inclusive range of addresses allowed to use the SAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SasIpRange {
    start: IpAddr,
    end: Option<IpAddr>,
}

impl SasIpRange {
    /// Allow a single address.
    pub fn single(ip: IpAddr) -> Self {
        Self {
            start: ip,
            end: None,
        }
    }

    /// Allow every address between `start` and `end`.
    pub fn range(start: IpAddr, end: IpAddr) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

impl fmt::Display for SasIpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}

impl FromStr for SasIpRange {
    type Err = Error;

    /// Parse `ip` or `ip1-ip2`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |v: &str| {
            v.trim().parse::<IpAddr>().map_err(|e| {
                Error::config_invalid(format!("invalid SAS ip range: {s}")).with_source(e)
            })
        };

        match s.split_once('-') {
            Some((start, end)) => Ok(Self::range(parse(start)?, parse(end)?)),
            None => Ok(Self::single(parse(s)?)),
        }
    }
}

/// The access grant a user delegation SAS carries.
///
/// Built through [`SasRequest::builder`], read-only afterwards.
///
/// ```
/// use blobsas_azure_blob::SasRequest;
/// use chrono::{TimeZone, Utc};
///
/// let req = SasRequest::builder()
///     .permissions("r")
///     .expires_on(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .container_name("photos")
///     .blob_name("2023/cat.png")
///     .build()
///     .unwrap();
/// assert_eq!(req.resource().as_str(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SasRequest {
    permissions: Option<String>,
    starts_on: Option<DateTime>,
    expires_on: Option<DateTime>,
    protocol: SasProtocol,
    ip_range: Option<SasIpRange>,
    identifier: Option<String>,
    container_name: Option<String>,
    blob_name: Option<String>,
    snapshot_id: Option<String>,
    blob_version_id: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    preauthorized_agent_object_id: Option<String>,
    correlation_id: Option<String>,
    version: String,
}

impl SasRequest {
    /// Start building a new request.
    pub fn builder() -> SasRequestBuilder {
        SasRequestBuilder::default()
    }

    /// Signed permissions, `sp`.
    pub fn permissions(&self) -> Option<&str> {
        self.permissions.as_deref()
    }

    /// Signed start, `st`.
    pub fn starts_on(&self) -> Option<DateTime> {
        self.starts_on
    }

    /// Signed expiry, `se`.
    pub fn expires_on(&self) -> Option<DateTime> {
        self.expires_on
    }

    /// Signed protocol, `spr`.
    pub fn protocol(&self) -> SasProtocol {
        self.protocol
    }

    /// Signed ip, `sip`.
    pub fn ip_range(&self) -> Option<SasIpRange> {
        self.ip_range
    }

    /// Stored access policy identifier, `si`.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Container the grant is scoped to.
    pub fn container_name(&self) -> Option<&str> {
        self.container_name.as_deref()
    }

    /// Blob the grant is scoped to.
    pub fn blob_name(&self) -> Option<&str> {
        self.blob_name.as_deref()
    }

    /// Snapshot the grant is scoped to.
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// Blob version the grant is scoped to.
    pub fn blob_version_id(&self) -> Option<&str> {
        self.blob_version_id.as_deref()
    }

    /// Cache-Control response override, `rscc`.
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    /// Content-Disposition response override, `rscd`.
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    /// Content-Encoding response override, `rsce`.
    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    /// Content-Language response override, `rscl`.
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    /// Content-Type response override, `rsct`.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Preauthorized agent object id, `saoid`.
    pub fn preauthorized_agent_object_id(&self) -> Option<&str> {
        self.preauthorized_agent_object_id.as_deref()
    }

    /// Correlation id for storage audit logs, `scid`.
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Signed version, `sv`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The resource type derived from blob name, snapshot and version.
    pub fn resource(&self) -> SasResource {
        SasResource::from_names(
            self.blob_name(),
            self.snapshot_id(),
            self.blob_version_id(),
        )
    }
}

/// Builder for [`SasRequest`].
#[derive(Debug, Clone, Default)]
pub struct SasRequestBuilder {
    permissions: Option<String>,
    starts_on: Option<DateTime>,
    expires_on: Option<DateTime>,
    protocol: SasProtocol,
    ip_range: Option<SasIpRange>,
    identifier: Option<String>,
    container_name: Option<String>,
    blob_name: Option<String>,
    snapshot_id: Option<String>,
    blob_version_id: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    preauthorized_agent_object_id: Option<String>,
    correlation_id: Option<String>,
    version: Option<String>,
}

impl SasRequestBuilder {
    /// Set permissions, accepts a plain string or [`crate::BlobSasPermissions`].
    ///
    /// The order of letters is not checked here.
    pub fn permissions(mut self, v: impl Into<String>) -> Self {
        self.permissions = Some(v.into());
        self
    }

    /// Set the time the SAS becomes valid.
    pub fn starts_on(mut self, v: DateTime) -> Self {
        self.starts_on = Some(v);
        self
    }

    /// Set the time the SAS becomes invalid.
    pub fn expires_on(mut self, v: DateTime) -> Self {
        self.expires_on = Some(v);
        self
    }

    /// Restrict the protocol.
    pub fn protocol(mut self, v: SasProtocol) -> Self {
        self.protocol = v;
        self
    }

    /// Restrict the client ip.
    pub fn ip_range(mut self, v: SasIpRange) -> Self {
        self.ip_range = Some(v);
        self
    }

    /// Refer to a stored access policy.
    ///
    /// With an identifier, permissions and expiry may come from the policy.
    pub fn identifier(mut self, v: impl Into<String>) -> Self {
        self.identifier = Some(v.into());
        self
    }

    /// Set container name.
    pub fn container_name(mut self, v: impl Into<String>) -> Self {
        self.container_name = Some(v.into());
        self
    }

    /// Set blob name.
    pub fn blob_name(mut self, v: impl Into<String>) -> Self {
        self.blob_name = Some(v.into());
        self
    }

    /// Set snapshot id.
    pub fn snapshot_id(mut self, v: impl Into<String>) -> Self {
        self.snapshot_id = Some(v.into());
        self
    }

    /// Set blob version id.
    pub fn blob_version_id(mut self, v: impl Into<String>) -> Self {
        self.blob_version_id = Some(v.into());
        self
    }

    /// Override Cache-Control of the response.
    pub fn cache_control(mut self, v: impl Into<String>) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    /// Override Content-Disposition of the response.
    pub fn content_disposition(mut self, v: impl Into<String>) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    /// Override Content-Encoding of the response.
    pub fn content_encoding(mut self, v: impl Into<String>) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    /// Override Content-Language of the response.
    pub fn content_language(mut self, v: impl Into<String>) -> Self {
        self.content_language = Some(v.into());
        self
    }

    /// Override Content-Type of the response.
    pub fn content_type(mut self, v: impl Into<String>) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Set the preauthorized agent object id.
    pub fn preauthorized_agent_object_id(mut self, v: impl Into<String>) -> Self {
        self.preauthorized_agent_object_id = Some(v.into());
        self
    }

    /// Set the correlation id.
    pub fn correlation_id(mut self, v: impl Into<String>) -> Self {
        self.correlation_id = Some(v.into());
        self
    }

    /// Set the SAS version, defaults to [`DEFAULT_SAS_VERSION`].
    pub fn version(mut self, v: impl Into<String>) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Validate and build the request.
    ///
    /// Without an identifier, both permissions and expiry are required.
    pub fn build(self) -> Result<SasRequest> {
        let identifier = non_empty(self.identifier);
        let permissions = non_empty(self.permissions);

        if identifier.is_none() {
            if self.expires_on.is_none() {
                return Err(sas_missing_data("expires_on"));
            }
            if permissions.is_none() {
                return Err(sas_missing_data("permissions"));
            }
        }

        Ok(SasRequest {
            permissions,
            starts_on: self.starts_on,
            expires_on: self.expires_on,
            protocol: self.protocol,
            ip_range: self.ip_range,
            identifier,
            container_name: non_empty(self.container_name),
            blob_name: non_empty(self.blob_name),
            snapshot_id: non_empty(self.snapshot_id),
            blob_version_id: non_empty(self.blob_version_id),
            cache_control: non_empty(self.cache_control),
            content_disposition: non_empty(self.content_disposition),
            content_encoding: non_empty(self.content_encoding),
            content_language: non_empty(self.content_language),
            content_type: non_empty(self.content_type),
            preauthorized_agent_object_id: non_empty(self.preauthorized_agent_object_id),
            correlation_id: non_empty(self.correlation_id),
            version: non_empty(self.version).unwrap_or_else(|| DEFAULT_SAS_VERSION.to_string()),
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|v| !v.trim().is_empty())
}

fn sas_missing_data(param: &str) -> Error {
    Error::config_invalid(format!("SAS is missing required parameter: {param}"))
}
