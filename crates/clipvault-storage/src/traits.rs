//! Storage abstraction trait
//!
//! All storage backends must implement `ObjectStore`. Backends are shared,
//! read-mostly handles: one client serves every in-flight upload without
//! per-request locking.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Put failed: {0}")]
    PutFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable put plus time-limited signed access.
///
/// `put` must not partially succeed from the caller's perspective: either
/// the object is fully readable afterwards or the call reports an error.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a byte buffer under `key`.
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Store the contents of a local file under `key`, streaming from disk.
    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<()>;

    /// Produce a presigned GET URL for `(bucket, key)` with the expiry
    /// embedded in the URL. Never persisted; computed on every read.
    async fn presigned_get_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// The bucket new objects are written to.
    fn bucket(&self) -> &str;
}
