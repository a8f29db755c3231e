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

use blobsas_azure_blob::{
    apply_sas_token, BlobSasPermissions, DelegationKey, RequestSigner, SasProtocol, SasRequest,
};
use blobsas_core::time::parse_rfc3339;
use blobsas_core::{Context, HmacSha256};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn init() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();
    Context::new().with_sign_message(HmacSha256)
}

fn key() -> DelegationKey {
    DelegationKey {
        signed_object_id: "oid1".to_string(),
        signed_version: "2020-08-04".to_string(),
        value: "a2V5".to_string(),
        ..Default::default()
    }
}

fn query_keys(token: &str) -> Vec<&str> {
    token
        .split('&')
        .map(|kv| kv.split_once('=').map(|(k, _)| k).unwrap_or(kv))
        .collect()
}

#[tokio::test]
async fn test_container_token() {
    let ctx = init();
    let req = SasRequest::builder()
        .permissions(BlobSasPermissions {
            read: true,
            ..Default::default()
        })
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont")
        .build()
        .unwrap();

    let token = RequestSigner::new("acct")
        .unwrap()
        .build_token(&ctx, &req, &key())
        .await
        .unwrap();

    assert_eq!(
        token,
        "skoid=oid1&skv=2020-08-04&sv=2020-08-04&se=2024-01-01T00%3A00%3A00Z&sr=c&sp=r&sig=VDGvwEDpCIL9VsZ1qeacA6Uf6IEjrQ2GoNiXlAVApqc%3D"
    );
}

#[test_case(None, None, None, "c"; "container")]
#[test_case(Some("a.txt"), None, None, "b"; "blob")]
#[test_case(Some("a.txt"), Some("2024-01-01T00:00:00.0000000Z"), None, "bs"; "snapshot")]
#[test_case(Some("a.txt"), None, Some("2024-01-01T00:00:00.0000000Z"), "bv"; "version")]
#[test_case(Some("a.txt"), Some("snap"), Some("ver"), "bv"; "snapshot and version")]
#[tokio::test]
async fn test_resource_in_token(
    blob: Option<&str>,
    snapshot: Option<&str>,
    version: Option<&str>,
    expected: &str,
) {
    let ctx = init();
    let mut builder = SasRequest::builder()
        .permissions("r")
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont");
    if let Some(v) = blob {
        builder = builder.blob_name(v);
    }
    if let Some(v) = snapshot {
        builder = builder.snapshot_id(v);
    }
    if let Some(v) = version {
        builder = builder.blob_version_id(v);
    }

    let token = RequestSigner::new("acct")
        .unwrap()
        .build_token(&ctx, &builder.build().unwrap(), &key())
        .await
        .unwrap();

    let sr = token.split('&').find_map(|kv| kv.strip_prefix("sr="));
    assert_eq!(sr, Some(expected));
}

#[tokio::test]
async fn test_parameter_order() {
    let ctx = init();
    let key = DelegationKey {
        signed_tenant_id: "tid1".to_string(),
        signed_starts_on: Some(parse_rfc3339("2023-12-31T00:00:00Z").unwrap()),
        signed_expires_on: Some(parse_rfc3339("2024-01-07T00:00:00Z").unwrap()),
        signed_service: "b".to_string(),
        ..key()
    };
    let req = SasRequest::builder()
        .permissions("rw")
        .starts_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .expires_on(parse_rfc3339("2024-01-02T00:00:00Z").unwrap())
        .protocol(SasProtocol::HttpsOrHttp)
        .ip_range("10.0.0.1".parse().unwrap())
        .identifier("policy-1")
        .container_name("cont")
        .blob_name("a.txt")
        .cache_control("no-cache")
        .content_disposition("inline")
        .content_encoding("gzip")
        .content_language("en")
        .content_type("text/plain")
        .preauthorized_agent_object_id("agent")
        .correlation_id("corr")
        .build()
        .unwrap();

    let token = RequestSigner::new("acct")
        .unwrap()
        .build_token(&ctx, &req, &key)
        .await
        .unwrap();

    assert_eq!(
        query_keys(&token),
        vec![
            "skoid", "sktid", "skt", "ske", "sks", "skv", "sv", "spr", "st", "se", "sip", "si",
            "sr", "sp", "rscc", "rscd", "rsce", "rscl", "rsct", "saoid", "scid", "sig"
        ]
    );
    assert!(token.contains("&spr=https,http&"));
}

#[tokio::test]
async fn test_version_override() {
    let ctx = init();
    let req = SasRequest::builder()
        .permissions("r")
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont")
        .version("2021-06-08")
        .build()
        .unwrap();

    let token = RequestSigner::new("acct")
        .unwrap()
        .build_token(&ctx, &req, &key())
        .await
        .unwrap();
    assert!(token.contains("&sv=2021-06-08&"));
}

#[tokio::test]
async fn test_apply_token_to_request() {
    let ctx = init();
    let req = SasRequest::builder()
        .permissions("r")
        .expires_on(parse_rfc3339("2024-01-01T00:00:00Z").unwrap())
        .container_name("cont")
        .blob_name("a.txt")
        .build()
        .unwrap();
    let token = RequestSigner::new("acct")
        .unwrap()
        .build_token(&ctx, &req, &key())
        .await
        .unwrap();

    let (mut parts, _) = http::Request::get("https://acct.blob.core.windows.net/cont/a.txt")
        .body(())
        .unwrap()
        .into_parts();
    apply_sas_token(&mut parts, &token).unwrap();

    assert_eq!(parts.uri.query(), Some(token.as_str()));
    assert_eq!(parts.uri.path(), "/cont/a.txt");
}
