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
use blobsas_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::config::Config;
use crate::credential::DelegationKey;
use crate::provide_credential::{EnvCredentialProvider, FileCredentialProvider};

/// DefaultCredentialProvider tries, in order:
///
/// - the file named by `AZURE_STORAGE_DELEGATION_KEY_FILE`
/// - the file named by [`Config::delegation_key_file`], if built with
///   [`DefaultCredentialProvider::from_config`]
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<DelegationKey>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }
}

impl DefaultCredentialProvider {
    /// Create a new default provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default provider that falls back to the key file in `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());
        if let Some(path) = config.delegation_key_file.as_deref().filter(|v| !v.is_empty()) {
            chain = chain.push(FileCredentialProvider::new(path));
        }

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
