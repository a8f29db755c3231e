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

//! Azure Blob Storage SAS issuance with convenience APIs.

pub use blobsas_azure_blob::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result, Signer};

/// Default signer type for Azure Blob Storage.
pub type DefaultSigner = blobsas_core::Signer<DelegationKey, SasRequest>;

/// Create a signer for `account_name` with the default components:
///
/// - [`default_context`](crate::default_context)
/// - [`DefaultCredentialProvider`] reading the key file from env or [`Config`]
/// - [`RequestSigner`] for `account_name`
///
/// Other settings are loaded from env through [`Config::from_env`].
///
/// # Customization
///
/// ```no_run
/// # fn example() -> blobsas::Result<()> {
/// use blobsas::azure::{default_signer, StaticCredentialProvider};
///
/// let signer = default_signer("myaccount")?.with_credential_provider(
///     StaticCredentialProvider::from_xml(&std::fs::read_to_string("key.xml")?)?,
/// );
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(account_name: &str) -> Result<DefaultSigner> {
    let ctx = default_context();
    let config = Config {
        account_name: Some(account_name.to_string()),
        ..Default::default()
    }
    .from_env(&ctx);

    let provider = DefaultCredentialProvider::from_config(&config);
    let signer = RequestSigner::from_config(&config)?;
    Ok(Signer::new(ctx, provider, signer))
}
