//! Shared HTTP client for the Coder Fest registration API.
//!
//! Provides a minimal client with Bearer auth (the shared anonymous API
//! key), generic GET helpers, and domain methods (register, list, health).
//! The form controller and the organizer CLI use this client directly.

pub mod api;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the registration API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: String, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create client from environment: CODERFEST_API_URL (or API_URL) and
    /// CODERFEST_API_KEY (or API_KEY).
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CODERFEST_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let token = std::env::var("CODERFEST_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .context("Missing API key. Set CODERFEST_API_KEY or API_KEY")?;

        Self::new(base_url, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// GET a JSON document from an API path.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("Request failed: GET {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GET {} returned {}: {}", url, status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Invalid response body from GET {}", url))
    }
}
