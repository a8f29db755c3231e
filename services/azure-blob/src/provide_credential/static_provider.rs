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

use crate::credential::DelegationKey;

/// StaticCredentialProvider always returns the delegation key it was built with.
#[derive(Clone, Debug)]
pub struct StaticCredentialProvider {
    key: DelegationKey,
}

impl StaticCredentialProvider {
    /// Create a provider for an already obtained key.
    pub fn new(key: DelegationKey) -> Self {
        Self { key }
    }

    /// Create a provider from a `UserDelegationKey` XML document.
    pub fn from_xml(content: &str) -> Result<Self> {
        Ok(Self::new(DelegationKey::from_xml(content)?))
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.key.clone()))
    }
}
