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

//! Core components for issuing shared access signatures.
//!
//! This crate provides the foundational types and traits for the blobsas
//! ecosystem. Service crates build on top of it to turn an access grant and
//! a signing key into a token.
//!
//! ## Overview
//!
//! - **Context**: holds the injected capabilities: file reading, environment
//!   access and the signing provider.
//! - **Traits**: [`ProvideCredential`] loads the signing key, [`SignRequest`]
//!   builds the token, [`SignMessage`] computes the HMAC.
//! - **Signer**: caches the loaded credential and drives [`SignRequest`].
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use blobsas_core::{Context, HmacSha256, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyKey(Vec<u8>);
//!
//! impl SigningCredential for MyKey {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyKey;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<MyKey>> {
//!         Ok(Some(MyKey(b"secret".to_vec())))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyKey;
//!     type Request = String;
//!
//!     async fn sign_request(&self, ctx: &Context, req: &String, key: Option<&MyKey>) -> Result<String> {
//!         let key = key.expect("key must be loaded");
//!         let sig = ctx.sign_message(req, &key.0).await?;
//!         Ok(format!("{req}&sig={sig}"))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_sign_message(HmacSha256);
//! let signer = Signer::new(ctx, MyLoader, MyBuilder);
//! let token = signer.sign(&"sp=r".to_string()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and HMAC helpers
//! - [`time`]: SAS time formatting
//! - [`utils`]: redaction of secrets in `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Context, Env, FileRead, NoopEnv, NoopFileRead, NoopSignMessage, OsEnv, StaticEnv,
};
mod error;
pub use error::{Error, ErrorKind, Result};

mod sign;
pub use sign::{HmacSha256, LazySignMessage, ProvideSignMessage, SignMessage};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
