// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque blob-store boundary (spec §1: object storage is out of scope,
//! "treated as an opaque blob-store API"). Writes are idempotent overwrites.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("blob store error: {0}")]
    Backend(String),
}

/// Content-addressed object storage, keyed per spec §6.3's conventions.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), BlobError>;
    async fn get(&self, key: &str) -> Result<Vec<u8>, BlobError>;
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{BlobError, BlobStore};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// In-memory [`BlobStore`] for tests. Overwrites are idempotent, matching
    /// the production contract.
    #[derive(Clone, Default)]
    pub struct FakeBlobStore {
        objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl FakeBlobStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, key: &str) -> bool {
            self.objects.lock().contains_key(key)
        }
    }

    #[async_trait]
    impl BlobStore for FakeBlobStore {
        async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), BlobError> {
            self.objects.lock().insert(key.to_string(), data);
            Ok(())
        }

        async fn get(&self, key: &str) -> Result<Vec<u8>, BlobError> {
            self.objects
                .lock()
                .get(key)
                .cloned()
                .ok_or_else(|| BlobError::NotFound(key.to_string()))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeBlobStore;

#[cfg(test)]
#[path = "blob_tests.rs"]
mod tests;
