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

//! User delegation SAS issuance for Azure Blob Storage.
//!
//! This crate turns a [`SasRequest`] and a [`DelegationKey`] into a SAS
//! token string. The HMAC is computed by the signing provider configured on
//! the [`Context`](blobsas_core::Context), so the key material can live in a
//! separate process if needed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blobsas_azure_blob::{DelegationKey, RequestSigner, SasRequest, StaticCredentialProvider};
//! use blobsas_core::{Context, HmacSha256, Result, Signer};
//! use chrono::{Duration, Utc};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_sign_message(HmacSha256);
//!
//!     // The key is obtained out-of-band via `Get User Delegation Key`.
//!     let key = DelegationKey::from_xml(&std::fs::read_to_string("key.xml")?)?;
//!
//!     let signer = Signer::new(
//!         ctx,
//!         StaticCredentialProvider::new(key),
//!         RequestSigner::new("myaccount")?,
//!     );
//!
//!     let req = SasRequest::builder()
//!         .permissions("r")
//!         .expires_on(Utc::now() + Duration::hours(1))
//!         .container_name("photos")
//!         .blob_name("cat.png")
//!         .build()?;
//!
//!     let token = signer.sign(&req).await?;
//!     println!("https://myaccount.blob.core.windows.net/photos/cat.png?{token}");
//!     Ok(())
//! }
//! ```
//!
//! ## Credential sources
//!
//! - [`StaticCredentialProvider`]: a key already in memory
//! - [`FileCredentialProvider`]: a `UserDelegationKey` XML document on disk
//! - [`EnvCredentialProvider`]: the file named by `AZURE_STORAGE_DELEGATION_KEY_FILE`
//! - [`DefaultCredentialProvider`]: env first, then [`Config`]

#![warn(missing_docs)]

mod constants;
pub use constants::DEFAULT_SAS_VERSION;

mod config;
pub use config::Config;

mod credential;
pub use credential::DelegationKey;

mod permissions;
pub use permissions::BlobSasPermissions;

mod resource;
pub use resource::{canonical_name, SasResource};

mod request;
pub use request::{SasIpRange, SasProtocol, SasRequest, SasRequestBuilder};

mod sign_request;
pub use sign_request::{apply_sas_token, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
