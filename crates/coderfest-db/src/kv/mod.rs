//! Key-value store abstraction.
//!
//! Values are JSON documents; keys are application-namespaced strings
//! (e.g. `registration:REG-...`).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use coderfest_core::AppError;
use serde_json::Value;

/// Narrow KV interface: exact-key get/set plus key-prefix scan.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Upsert a value under the given key.
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;

    /// Fetch a value by exact key.
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Fetch all values whose key starts with `prefix`, ordered by key.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, AppError>;
}
