//! Application setup and initialization.
//!
//! All startup logic lives here, out of main.rs, so integration tests can
//! assemble the same pieces against in-memory backends.

pub mod database;
pub mod routes;
pub mod server;

use anyhow::{Context, Result};
use coderfest_core::Config;
use coderfest_db::RegistrationRepository;

use crate::services::email::EmailService;
use crate::state::AppState;

/// Initialize the entire application: telemetry, KV store, object storage,
/// email, and routes.
pub async fn initialize_app(config: Config) -> Result<(AppState, axum::Router)> {
    // Fail fast on misconfiguration.
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()?;

    tracing::info!(
        environment = %config.environment(),
        kv_backend = %config.kv_backend(),
        storage_backend = %config.storage_backend(),
        "Configuration loaded and validated"
    );

    let kv = database::setup_kv_store(&config).await?;
    let registrations = RegistrationRepository::new(kv);

    let storage = coderfest_storage::create_storage(&config)
        .await
        .context("Failed to initialize object storage")?;

    let email = EmailService::from_config(&config);
    if email.is_none() {
        tracing::info!("Confirmation emails disabled or SMTP not configured");
    }

    let is_production = config.is_production();
    let state = AppState {
        config: config.clone(),
        registrations,
        storage,
        email,
        is_production,
    };

    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
