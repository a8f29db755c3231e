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

use std::collections::HashMap;

use blobsas_azure_blob::{Config, DefaultCredentialProvider, RequestSigner};
use blobsas_core::{Context, ProvideCredential, StaticEnv};
use blobsas_file_read_tokio::TokioFileRead;

#[tokio::test]
async fn test_default_provider_from_env_config() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("key.xml");
    std::fs::write(
        &path,
        "<UserDelegationKey><SignedOid>oid1</SignedOid><Value>a2V5</Value></UserDelegationKey>",
    )
    .unwrap();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            envs: HashMap::from([
                ("AZBLOB_ACCOUNT_NAME".to_string(), "acct".to_string()),
                (
                    "AZURE_STORAGE_DELEGATION_KEY_FILE".to_string(),
                    path.to_string_lossy().to_string(),
                ),
            ]),
        });

    let config = Config::default().from_env(&ctx);
    let signer = RequestSigner::from_config(&config).unwrap();
    assert_eq!(signer.account_name(), "acct");

    let key = DefaultCredentialProvider::from_config(&config)
        .provide_credential(&ctx)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(key.signed_object_id, "oid1");
}

#[tokio::test]
async fn test_default_provider_without_env() {
    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv::default());

    let config = Config::default().from_env(&ctx);
    assert!(RequestSigner::from_config(&config)
        .unwrap_err()
        .is_config_error());

    let key = DefaultCredentialProvider::from_config(&config)
        .provide_credential(&ctx)
        .await
        .unwrap();
    assert!(key.is_none());
}
