//! Coder Fest Storage Library
//!
//! Object-storage abstraction for payment-proof images. Provides the
//! `Storage` trait with S3 and local-filesystem backends.
//!
//! # Storage key format
//!
//! Payment proofs live under `payments/{registration_id}.{ext}`. Keys must
//! not contain `..` or a leading `/`. Key generation is centralized in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use coderfest_core::StorageBackend;
pub use factory::create_storage;
pub use keys::{file_extension, payment_proof_key};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
