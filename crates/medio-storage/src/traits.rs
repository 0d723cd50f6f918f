//! Storage abstraction trait
//!
//! This module defines the `ObjectStore` trait that all store backends must
//! implement, so the pipelines can work against any backend (or a test mock)
//! without coupling to implementation details.

use async_trait::async_trait;
use medio_core::{AccessLevel, ProviderError};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for ProviderError {
    fn from(err: StorageError) -> Self {
        ProviderError::Storage(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object-store abstraction.
///
/// Callers pass fully derived keys; backends never rewrite them. Deleting a
/// non-existent key is not an error (S3 semantics), so key derivation must be
/// byte-identical between upload and delete or deletion silently no-ops.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload an object under `key` and return its publicly accessible URL
    /// (custom-domain rewrite applied when configured).
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        acl: AccessLevel,
    ) -> StorageResult<String>;

    /// Delete the object stored under `key`.
    async fn delete(&self, key: &str) -> StorageResult<()>;
}
