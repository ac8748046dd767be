//! Storage abstraction trait
//!
//! This module defines the `Storage` trait that all storage backends must
//! implement. The registration handler works against this trait and never
//! against a concrete provider.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use coderfest_core::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// Payment proofs are written to a private bucket and only handed out via
/// time-bounded signed references.
///
/// **Key format:** `payments/{registration_id}.{ext}`. See the crate root
/// documentation and the `keys` module.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a file under the given storage key, preserving content type.
    async fn upload(
        &self,
        storage_key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()>;

    /// Generate a signed/temporary URL for direct GET access.
    ///
    /// The returned reference is the only way clients can read the private
    /// object; it expires after `expires_in`.
    async fn signed_url(&self, storage_key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Delete a file by its storage key.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Get the storage backend type.
    fn backend_type(&self) -> StorageBackend;
}
