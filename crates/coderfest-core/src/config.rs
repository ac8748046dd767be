//! Configuration module
//!
//! Environment-driven configuration for the registration API and tooling.
//! `Config::from_env()` loads `.env` (if present) and the process
//! environment; `validate()` runs at startup so misconfiguration fails fast.

use std::env;
use std::str::FromStr;

use crate::storage_types::{KvBackend, StorageBackend};

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_S3_BUCKET: &str = "coderfest-payments";
/// One year, matching the signed-access window granted on payment proofs.
const DEFAULT_SIGNED_URL_EXPIRY_SECS: u64 = 60 * 60 * 24 * 365;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    environment: String,
    cors_origins: Vec<String>,
    api_key: String,

    kv_backend: KvBackend,
    database_url: Option<String>,
    db_max_connections: u32,
    db_timeout_seconds: u64,

    storage_backend: StorageBackend,
    s3_bucket: String,
    s3_region: Option<String>,
    aws_region: Option<String>,
    s3_endpoint: Option<String>,
    local_storage_path: Option<String>,
    local_storage_base_url: Option<String>,
    signed_url_expiry_secs: u64,
    max_upload_size_bytes: usize,

    email_enabled: bool,
    smtp_host: Option<String>,
    smtp_port: u16,
    smtp_user: Option<String>,
    smtp_password: Option<String>,
    smtp_from: Option<String>,
    smtp_tls: bool,
    coordinator_email: Option<String>,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, anyhow::Error> {
    match env_opt(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, raw)),
        None => Ok(default),
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env_opt(key) {
        Some(raw) => matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes"),
        None => default,
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let api_key = env_opt("API_KEY")
            .ok_or_else(|| anyhow::anyhow!("API_KEY must be set (shared bearer token)"))?;

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment: env_or("ENVIRONMENT", "development"),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "")),
            api_key,

            kv_backend: env_or("KV_BACKEND", "postgres").parse()?,
            database_url: env_opt("DATABASE_URL"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS)?,

            storage_backend: env_or("STORAGE_BACKEND", "s3").parse()?,
            s3_bucket: env_or("S3_BUCKET", DEFAULT_S3_BUCKET),
            s3_region: env_opt("S3_REGION"),
            aws_region: env_opt("AWS_REGION"),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            local_storage_base_url: env_opt("LOCAL_STORAGE_BASE_URL"),
            signed_url_expiry_secs: env_parse(
                "SIGNED_URL_EXPIRY_SECS",
                DEFAULT_SIGNED_URL_EXPIRY_SECS,
            )?,
            max_upload_size_bytes: env_parse(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            )?,

            email_enabled: env_bool("EMAIL_ENABLED", false),
            smtp_host: env_opt("SMTP_HOST"),
            smtp_port: env_parse("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            smtp_user: env_opt("SMTP_USER"),
            smtp_password: env_opt("SMTP_PASSWORD"),
            smtp_from: env_opt("SMTP_FROM"),
            smtp_tls: env_bool("SMTP_TLS", true),
            coordinator_email: env_opt("COORDINATOR_EMAIL"),
        })
    }

    /// Fail fast on missing backend configuration.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.kv_backend == KvBackend::Postgres && self.database_url.is_none() {
            anyhow::bail!("DATABASE_URL must be set when KV_BACKEND=postgres");
        }
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    anyhow::bail!("S3_REGION or AWS_REGION must be set when STORAGE_BACKEND=s3");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set when STORAGE_BACKEND=local"
                    );
                }
            }
        }
        if self.signed_url_expiry_secs == 0 {
            anyhow::bail!("SIGNED_URL_EXPIRY_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn kv_backend(&self) -> KvBackend {
        self.kv_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> &str {
        &self.s3_bucket
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.local_storage_base_url.as_deref()
    }

    pub fn signed_url_expiry_secs(&self) -> u64 {
        self.signed_url_expiry_secs
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }

    pub fn email_enabled(&self) -> bool {
        self.email_enabled
    }

    pub fn smtp_host(&self) -> Option<&str> {
        self.smtp_host.as_deref()
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp_port
    }

    pub fn smtp_user(&self) -> Option<&str> {
        self.smtp_user.as_deref()
    }

    pub fn smtp_password(&self) -> Option<&str> {
        self.smtp_password.as_deref()
    }

    pub fn smtp_from(&self) -> Option<&str> {
        self.smtp_from.as_deref()
    }

    pub fn smtp_tls(&self) -> bool {
        self.smtp_tls
    }

    pub fn coordinator_email(&self) -> Option<&str> {
        self.coordinator_email.as_deref()
    }
}
