//! KV store setup: Postgres pool plus migrations, or the in-memory backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use coderfest_core::{Config, KvBackend};
use coderfest_db::{KvStore, MemoryKvStore, PgKvStore};
use sqlx::postgres::PgPoolOptions;

/// Create the configured KV store backend.
pub async fn setup_kv_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match config.kv_backend() {
        KvBackend::Memory => {
            tracing::warn!("Using in-memory KV store - registrations are not durable");
            Ok(Arc::new(MemoryKvStore::new()))
        }
        KvBackend::Postgres => {
            let database_url = config
                .database_url()
                .context("DATABASE_URL must be set when KV_BACKEND=postgres")?;

            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections())
                .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!(
                max_connections = config.db_max_connections(),
                "Database connected successfully"
            );

            // Run pending migrations on startup (workspace migrations/ from crate root).
            let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
            let migrator = sqlx::migrate::Migrator::new(migrations_dir)
                .await
                .context("Failed to load migrations")?;
            migrator
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgKvStore::new(pool)))
        }
    }
}
