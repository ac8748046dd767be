//! Health check handler.

use axum::Json;
use coderfest_core::constants::SERVICE_NAME;
use coderfest_core::models::HealthResponse;

/// Handle `GET /health`. Unauthenticated liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
