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

use blobsas_azure_blob::{FileCredentialProvider, RequestSigner, SasRequest};
use blobsas_core::time::parse_rfc3339;
use blobsas_core::{Context, ErrorKind, HmacSha256, ProvideCredential, Signer};
use blobsas_file_read_tokio::TokioFileRead;

const KEY_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<UserDelegationKey>
    <SignedOid>oid1</SignedOid>
    <SignedTid>tid1</SignedTid>
    <SignedStart>2023-12-31T00:00:00Z</SignedStart>
    <SignedExpiry>2099-01-01T00:00:00Z</SignedExpiry>
    <SignedService>b</SignedService>
    <SignedVersion>2020-08-04</SignedVersion>
    <Value>a2V5</Value>
</UserDelegationKey>"#;

#[tokio::test]
async fn test_sign_with_key_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("key.xml");
    std::fs::write(&path, KEY_XML).unwrap();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_sign_message(HmacSha256);
    let signer = Signer::new(
        ctx,
        FileCredentialProvider::new(path.to_string_lossy()),
        RequestSigner::new("acct").unwrap(),
    );

    let req = SasRequest::builder()
        .permissions("r")
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont")
        .build()
        .unwrap();
    let token = signer.sign(&req).await.unwrap();

    assert!(token.starts_with(
        "skoid=oid1&sktid=tid1&skt=2023-12-31T00%3A00%3A00Z&ske=2099-01-01T00%3A00%3A00Z&sks=b&skv=2020-08-04&sv=2020-08-04&"
    ));
    assert!(token.contains("&sig="));
}

#[tokio::test]
async fn test_malformed_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("key.xml");
    std::fs::write(&path, "<UserDelegationKey><Value>").unwrap();

    let ctx = Context::new().with_file_read(TokioFileRead);
    let err = FileCredentialProvider::new(path.to_string_lossy())
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
