//! Registration listing (admin read path).

use axum::extract::State;
use axum::Json;
use coderfest_core::models::RegistrationsResponse;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Handle `GET /registrations`.
///
/// Prefix-scans the KV store and returns every record, unfiltered and
/// unpaginated. The organizer tooling filters client-side; this is
/// acceptable only at event-scale record counts.
#[tracing::instrument(skip(state), fields(operation = "list_registrations"))]
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<RegistrationsResponse>, HttpAppError> {
    let registrations = state.registrations.list_all().await?;
    tracing::debug!(count = registrations.len(), "Fetched registrations");
    Ok(Json(RegistrationsResponse {
        success: true,
        registrations,
    }))
}
