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

use std::fmt;

/// The kind of resource a SAS grants access to, signed as `sr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SasResource {
    /// A whole container: `c`.
    Container,
    /// A single blob: `b`.
    Blob,
    /// A blob snapshot: `bs`.
    BlobSnapshot,
    /// A blob version: `bv`.
    BlobVersion,
}

impl SasResource {
    /// Derive the resource type from the identifiers present on a request.
    ///
    /// Empty strings count as absent. A blob version id takes priority over
    /// a snapshot id, so a request carrying both resolves to
    /// [`SasResource::BlobVersion`].
    pub fn from_names(
        blob_name: Option<&str>,
        snapshot_id: Option<&str>,
        blob_version_id: Option<&str>,
    ) -> Self {
        let present = |v: Option<&str>| v.is_some_and(|v| !v.is_empty());

        if !present(blob_name) {
            SasResource::Container
        } else if present(blob_version_id) {
            SasResource::BlobVersion
        } else if present(snapshot_id) {
            SasResource::BlobSnapshot
        } else {
            SasResource::Blob
        }
    }

    /// The short code used in the string-to-sign and the `sr` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SasResource::Container => "c",
            SasResource::Blob => "b",
            SasResource::BlobSnapshot => "bs",
            SasResource::BlobVersion => "bv",
        }
    }
}

impl fmt::Display for SasResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the canonical resource name that takes part in the string-to-sign.
///
/// - Container: `/blob/{account}/{container}`
/// - Blob: `/blob/{account}/{container}/{blob}`, with `\` in the blob name
///   replaced by `/`.
///
/// Nothing is percent-encoded here, this string is signed and never sent.
pub fn canonical_name(account_name: &str, container_name: &str, blob_name: &str) -> String {
    if blob_name.is_empty() {
        format!("/blob/{account_name}/{container_name}")
    } else {
        format!(
            "/blob/{account_name}/{container_name}/{}",
            blob_name.replace('\\', "/")
        )
    }
}
