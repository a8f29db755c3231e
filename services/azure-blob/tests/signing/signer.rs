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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use blobsas_azure_blob::{DelegationKey, RequestSigner, SasRequest, StaticCredentialProvider};
use blobsas_core::time::{now, parse_rfc3339};
use blobsas_core::{Context, ErrorKind, HmacSha256, ProvideCredential, Result, Signer};

fn request() -> SasRequest {
    SasRequest::builder()
        .permissions("r")
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont")
        .build()
        .unwrap()
}

#[derive(Debug)]
struct CountingProvider {
    loads: Arc<AtomicUsize>,
    expires_in_seconds: i64,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, _: &Context) -> Result<Option<DelegationKey>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Some(DelegationKey {
            signed_object_id: "oid1".to_string(),
            signed_expires_on: Some(
                now() + chrono::TimeDelta::try_seconds(self.expires_in_seconds).unwrap(),
            ),
            value: "a2V5".to_string(),
            ..Default::default()
        }))
    }
}

#[derive(Debug)]
struct EmptyProvider;

#[async_trait]
impl ProvideCredential for EmptyProvider {
    type Credential = DelegationKey;

    async fn provide_credential(&self, _: &Context) -> Result<Option<DelegationKey>> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_signer_with_static_key() {
    let _ = env_logger::builder().is_test(true).try_init();

    let key = DelegationKey {
        signed_object_id: "oid1".to_string(),
        signed_version: "2020-08-04".to_string(),
        value: "a2V5".to_string(),
        ..Default::default()
    };
    let signer = Signer::new(
        Context::new().with_sign_message(HmacSha256),
        StaticCredentialProvider::new(key),
        RequestSigner::new("acct").unwrap(),
    );

    let token = signer.sign(&request()).await.unwrap();
    assert_eq!(
        token,
        "skoid=oid1&skv=2020-08-04&sv=2020-08-04&se=2024-01-01T00%3A00%3A00Z&sr=c&sp=r&sig=VDGvwEDpCIL9VsZ1qeacA6Uf6IEjrQ2GoNiXlAVApqc%3D"
    );
}

#[tokio::test]
async fn test_signer_caches_valid_key() {
    let loads = Arc::new(AtomicUsize::new(0));
    let signer = Signer::new(
        Context::new().with_sign_message(HmacSha256),
        CountingProvider {
            loads: loads.clone(),
            expires_in_seconds: 3600,
        },
        RequestSigner::new("acct").unwrap(),
    );

    let first = signer.sign(&request()).await.unwrap();
    let second = signer.sign(&request()).await.unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_signer_reloads_expiring_key() {
    let loads = Arc::new(AtomicUsize::new(0));
    let signer = Signer::new(
        Context::new().with_sign_message(HmacSha256),
        CountingProvider {
            loads: loads.clone(),
            expires_in_seconds: 5,
        },
        RequestSigner::new("acct").unwrap(),
    );

    signer.sign(&request()).await.unwrap();
    signer.sign(&request()).await.unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_signer_without_key() {
    let signer = Signer::new(
        Context::new().with_sign_message(HmacSha256),
        EmptyProvider,
        RequestSigner::new("acct").unwrap(),
    );

    let err = signer.sign(&request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
