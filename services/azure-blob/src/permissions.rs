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
use std::str::FromStr;

use blobsas_core::Error;

/// Permissions a blob or container SAS may grant.
///
/// Rendered in the order the service expects: `racwdxyltmeopi`.
///
/// ```
/// use blobsas_azure_blob::BlobSasPermissions;
///
/// let p = BlobSasPermissions {
///     read: true,
///     list: true,
///     ..Default::default()
/// };
/// assert_eq!(p.to_string(), "rl");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobSasPermissions {
    /// `r`: read content, properties, metadata.
    pub read: bool,
    /// `a`: add a block to an append blob.
    pub add: bool,
    /// `c`: write a new blob.
    pub create: bool,
    /// `w`: create or write content.
    pub write: bool,
    /// `d`: delete a blob.
    pub delete: bool,
    /// `x`: delete a blob version.
    pub delete_version: bool,
    /// `y`: permanently delete a blob snapshot or version.
    pub permanent_delete: bool,
    /// `l`: list blobs.
    pub list: bool,
    /// `t`: read or write blob tags.
    pub tag: bool,
    /// `m`: move a blob or directory.
    pub r#move: bool,
    /// `e`: get system properties, execute.
    pub execute: bool,
    /// `o`: set owner or owning group.
    pub ownership: bool,
    /// `p`: set permissions.
    pub permissions: bool,
    /// `i`: set immutability policy.
    pub set_immutability_policy: bool,
}

impl BlobSasPermissions {
    fn flags(&self) -> [(char, bool); 14] {
        [
            ('r', self.read),
            ('a', self.add),
            ('c', self.create),
            ('w', self.write),
            ('d', self.delete),
            ('x', self.delete_version),
            ('y', self.permanent_delete),
            ('l', self.list),
            ('t', self.tag),
            ('m', self.r#move),
            ('e', self.execute),
            ('o', self.ownership),
            ('p', self.permissions),
            ('i', self.set_immutability_policy),
        ]
    }
}

impl fmt::Display for BlobSasPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, _) in self.flags().into_iter().filter(|(_, set)| *set) {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl From<BlobSasPermissions> for String {
    fn from(p: BlobSasPermissions) -> Self {
        p.to_string()
    }
}

impl FromStr for BlobSasPermissions {
    type Err = Error;

    /// Parse permission letters in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = BlobSasPermissions::default();
        for c in s.chars() {
            let flag = match c {
                'r' => &mut p.read,
                'a' => &mut p.add,
                'c' => &mut p.create,
                'w' => &mut p.write,
                'd' => &mut p.delete,
                'x' => &mut p.delete_version,
                'y' => &mut p.permanent_delete,
                'l' => &mut p.list,
                't' => &mut p.tag,
                'm' => &mut p.r#move,
                'e' => &mut p.execute,
                'o' => &mut p.ownership,
                'p' => &mut p.permissions,
                'i' => &mut p.set_immutability_policy,
                _ => {
                    return Err(Error::config_invalid(format!(
                        "invalid blob SAS permission: {c}"
                    )))
                }
            };
            *flag = true;
        }
        Ok(p)
    }
}
