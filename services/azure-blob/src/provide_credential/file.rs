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
use blobsas_core::{Context, Error, ProvideCredential, Result};
use log::debug;

use crate::credential::DelegationKey;

/// FileCredentialProvider loads a delegation key from a `UserDelegationKey`
/// XML document on disk.
///
/// The file is read again on every call, so a key rotated on disk is picked
/// up once the cached one expires.
#[derive(Clone, Debug)]
pub struct FileCredentialProvider {
    path: String,
}

impl FileCredentialProvider {
    /// Create a provider reading from `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path this provider reads from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        debug!("loading user delegation key from {}", self.path);

        let content = ctx.file_read_as_string(&self.path).await.map_err(|e| {
            Error::credential_invalid(format!(
                "failed to read user delegation key from {}",
                self.path
            ))
            .with_source(e)
        })?;

        DelegationKey::from_xml(&content).map(Some)
    }
}
