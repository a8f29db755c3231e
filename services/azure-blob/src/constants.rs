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

/// SAS protocol version used when the request doesn't carry one.
pub const DEFAULT_SAS_VERSION: &str = "2020-08-04";

// Env values used by config and credential providers.
pub const AZBLOB_ACCOUNT_NAME: &str = "AZBLOB_ACCOUNT_NAME";
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const AZURE_STORAGE_DELEGATION_KEY_FILE: &str = "AZURE_STORAGE_DELEGATION_KEY_FILE";

// Query parameter keys of a user delegation SAS.
pub const SAS_VERSION: &str = "sv";
pub const SAS_PROTOCOL: &str = "spr";
pub const SAS_START_TIME: &str = "st";
pub const SAS_EXPIRY_TIME: &str = "se";
pub const SAS_IP_RANGE: &str = "sip";
pub const SAS_IDENTIFIER: &str = "si";
pub const SAS_RESOURCE: &str = "sr";
pub const SAS_PERMISSIONS: &str = "sp";
pub const SAS_SIGNATURE: &str = "sig";
pub const SAS_KEY_OBJECT_ID: &str = "skoid";
pub const SAS_KEY_TENANT_ID: &str = "sktid";
pub const SAS_KEY_START: &str = "skt";
pub const SAS_KEY_EXPIRY: &str = "ske";
pub const SAS_KEY_SERVICE: &str = "sks";
pub const SAS_KEY_VERSION: &str = "skv";
pub const SAS_CACHE_CONTROL: &str = "rscc";
pub const SAS_CONTENT_DISPOSITION: &str = "rscd";
pub const SAS_CONTENT_ENCODING: &str = "rsce";
pub const SAS_CONTENT_LANGUAGE: &str = "rscl";
pub const SAS_CONTENT_TYPE: &str = "rsct";
pub const SAS_PREAUTHORIZED_AGENT_OBJECT_ID: &str = "saoid";
pub const SAS_CORRELATION_ID: &str = "scid";
