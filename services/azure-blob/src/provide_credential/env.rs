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
use blobsas_core::{Context, ProvideCredential, Result};

use crate::constants::AZURE_STORAGE_DELEGATION_KEY_FILE;
use crate::credential::DelegationKey;
use crate::provide_credential::FileCredentialProvider;

/// EnvCredentialProvider loads a delegation key from the file named by
/// [`AZURE_STORAGE_DELEGATION_KEY_FILE`].
///
/// Returns `Ok(None)` when the variable is unset or empty.
#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new env provider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(path) = ctx
            .env_var(AZURE_STORAGE_DELEGATION_KEY_FILE)
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };

        FileCredentialProvider::new(path)
            .provide_credential(ctx)
            .await
    }
}
