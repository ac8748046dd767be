//! Postgres-backed KV store over the `kv_store` table.

use async_trait::async_trait;
use coderfest_core::AppError;
use serde_json::Value;
use sqlx::PgPool;

use super::KvStore;

#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        tracing::debug!(key = %key, "KV set");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let value: Option<Value> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, AppError> {
        // Keys are application-controlled and contain no LIKE metacharacters.
        let values: Vec<Value> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key LIKE $1 || '%' ORDER BY key")
                .bind(prefix)
                .fetch_all(&self.pool)
                .await?;
        Ok(values)
    }
}
