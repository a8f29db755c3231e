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

//! Issue user delegation SAS tokens for blob storage.
//!
//! This crate re-exports [`blobsas_core`] and exposes each service under its
//! own module behind a feature flag:
//!
//! - `azure`: [`azure`] for Azure Blob Storage
//! - `default-context`: [`default_context`] wiring tokio file reading, the
//!   OS environment and in-process HMAC-SHA256
//!
//! ## Example
//!
//! ```no_run
//! use blobsas::azure::SasRequest;
//! use chrono::{Duration, Utc};
//!
//! # #[tokio::main]
//! # async fn main() -> blobsas::Result<()> {
//! // Reads the delegation key from `AZURE_STORAGE_DELEGATION_KEY_FILE`.
//! let signer = blobsas::azure::default_signer("myaccount")?;
//!
//! let req = SasRequest::builder()
//!     .permissions("rl")
//!     .expires_on(Utc::now() + Duration::hours(1))
//!     .container_name("photos")
//!     .build()?;
//! let token = signer.sign(&req).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use blobsas_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "azure")]
pub mod azure;
