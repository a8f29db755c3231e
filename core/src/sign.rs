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

//! Signing provider capability.

use crate::hash::base64_hmac_sha256;
use crate::{Error, Result};
use async_trait::async_trait;
use log::debug;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// SignMessage computes the base64 encoded HMAC-SHA256 of a message.
///
/// Implementations must be safe for concurrent invocation. The operation
/// may cross a process or runtime boundary, so it is async; dropping the
/// returned future cancels the call.
#[async_trait]
pub trait SignMessage: Debug + Send + Sync + 'static {
    /// Sign `message` with the raw `key` bytes and return the base64 signature.
    async fn sign_message(&self, message: &str, key: &[u8]) -> Result<String>;
}

/// In-process HMAC-SHA256 backed by the `hmac` and `sha2` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256;

#[async_trait]
impl SignMessage for HmacSha256 {
    async fn sign_message(&self, message: &str, key: &[u8]) -> Result<String> {
        Ok(base64_hmac_sha256(key, message.as_bytes()))
    }
}

/// ProvideSignMessage acquires a signing handle, for example a connection
/// to an out-of-process crypto bridge.
#[async_trait]
pub trait ProvideSignMessage: Debug + Send + Sync + 'static {
    /// The handle returned by this provider.
    type Handle: SignMessage;

    /// Acquire a new signing handle.
    async fn provide_sign_message(&self) -> Result<Self::Handle>;
}

/// LazySignMessage acquires its handle on first use and keeps it until
/// dropped.
///
/// Nothing is acquired if it's never used. Dropping the last clone of the
/// owning [`Context`](crate::Context) releases the handle.
#[derive(Debug)]
pub struct LazySignMessage<P: ProvideSignMessage> {
    provider: P,
    handle: Mutex<Option<Arc<P::Handle>>>,
}

impl<P: ProvideSignMessage> LazySignMessage<P> {
    /// Create a new lazy signing provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            handle: Mutex::new(None),
        }
    }

    /// Check whether the handle has been acquired.
    pub fn is_acquired(&self) -> bool {
        self.handle.lock().expect("lock poisoned").is_some()
    }

    async fn handle(&self) -> Result<Arc<P::Handle>> {
        let cached = self.handle.lock().expect("lock poisoned").clone();
        if let Some(handle) = cached {
            return Ok(handle);
        }

        debug!("acquiring signing provider handle");
        let handle = self.provider.provide_sign_message().await.map_err(|e| {
            Error::signing_failed("failed to acquire signing provider").with_source(e)
        })?;

        // Another caller may have won the race while we were acquiring, keep theirs.
        let mut guard = self.handle.lock().expect("lock poisoned");
        let handle = guard.get_or_insert_with(|| Arc::new(handle)).clone();
        Ok(handle)
    }
}

#[async_trait]
impl<P: ProvideSignMessage> SignMessage for LazySignMessage<P> {
    async fn sign_message(&self, message: &str, key: &[u8]) -> Result<String> {
        self.handle().await?.sign_message(message, key).await
    }
}
