//! In-memory KV store for development and tests. Not durable.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use coderfest_core::AppError;
use serde_json::Value;
use tokio::sync::RwLock;

use super::KvStore;

#[derive(Clone, Default)]
pub struct MemoryKvStore {
    inner: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, AppError> {
        let guard = self.inner.read().await;
        // BTreeMap keeps keys sorted, so a range scan from the prefix suffices.
        Ok(guard
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_get_roundtrip() {
        let kv = MemoryKvStore::new();
        kv.set("registration:REG-1", json!({"teamName": "A"}))
            .await
            .unwrap();
        let got = kv.get("registration:REG-1").await.unwrap().unwrap();
        assert_eq!(got["teamName"], "A");
        assert!(kv.get("registration:REG-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_existing_key() {
        let kv = MemoryKvStore::new();
        kv.set("k", json!(1)).await.unwrap();
        kv.set("k", json!(2)).await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().unwrap(), json!(2));
    }

    #[tokio::test]
    async fn prefix_scan_only_matches_namespace() {
        let kv = MemoryKvStore::new();
        kv.set("registration:REG-1", json!(1)).await.unwrap();
        kv.set("registration:REG-2", json!(2)).await.unwrap();
        kv.set("registrationx", json!(3)).await.unwrap();
        kv.set("other:1", json!(4)).await.unwrap();

        let values = kv.get_by_prefix("registration:").await.unwrap();
        assert_eq!(values, vec![json!(1), json!(2)]);
    }
}
