//! Registration submission handler.
//!
//! Accepts one multipart request, validates it, uploads the payment proof,
//! persists the registration record, and attempts a best-effort confirmation
//! email. Upload-then-persist is not atomic; a failed persist triggers a
//! best-effort delete of the uploaded object.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use coderfest_core::models::{RegisterResponse, Registration, RegistrationStatus, StudentDetail};
use coderfest_core::validation::{validate_registration, RegistrationInput};
use coderfest_core::AppError;
use coderfest_storage::{file_extension, payment_proof_key, Storage};

use crate::error::HttpAppError;
use crate::registration_id;
use crate::state::AppState;

/// Multipart field names expected in a submission, in contract order.
const TEXT_FIELDS: [&str; 6] = [
    "teamName",
    "leaderName",
    "leaderEmail",
    "leaderContact",
    "collegeName",
    "students",
];
const PROOF_FIELD: &str = "paymentProof";

struct ProofUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

struct SubmissionParts {
    fields: HashMap<String, String>,
    proof: Option<ProofUpload>,
}

async fn read_multipart(multipart: &mut Multipart) -> Result<SubmissionParts, AppError> {
    let mut fields = HashMap::new();
    let mut proof = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == PROOF_FIELD {
            let file_name = field.file_name().unwrap_or("proof.bin").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid payment proof upload: {}", e)))?
                .to_vec();
            proof = Some(ProofUpload {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid field {}: {}", name, e)))?;
            fields.insert(name, value);
        }
    }

    Ok(SubmissionParts { fields, proof })
}

/// Presence check over all seven submission parts. Missing or blank parts
/// are reported together, by field name.
fn check_presence(parts: &SubmissionParts) -> Result<(), AppError> {
    let mut missing: Vec<&str> = TEXT_FIELDS
        .iter()
        .copied()
        .filter(|name| {
            parts
                .fields
                .get(*name)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .collect();
    match &parts.proof {
        Some(proof) if !proof.bytes.is_empty() => {}
        _ => missing.push(PROOF_FIELD),
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

/// Handle `POST /register`.
#[tracing::instrument(skip(state, multipart), fields(operation = "register"))]
pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RegisterResponse>, HttpAppError> {
    let parts = read_multipart(&mut multipart).await?;
    check_presence(&parts)?;

    let field = |name: &str| parts.fields.get(name).cloned().unwrap_or_default();
    let team_name = field("teamName");
    let leader_name = field("leaderName");
    let leader_email = field("leaderEmail");
    let leader_contact = field("leaderContact");
    let college_name = field("collegeName");
    let proof = parts.proof.ok_or_else(|| {
        AppError::Validation(format!("Missing required fields: {}", PROOF_FIELD))
    })?;

    let students: Vec<StudentDetail> =
        serde_json::from_str(&field("students")).map_err(|e| {
            tracing::debug!(error = %e, "Failed to parse students JSON");
            AppError::Validation("Invalid students data".to_string())
        })?;

    validate_registration(&RegistrationInput {
        team_name: &team_name,
        leader_name: &leader_name,
        leader_email: &leader_email,
        leader_contact: &leader_contact,
        college_name: &college_name,
        students: &students,
    })?;

    let registration_id = registration_id::generate();

    // Upload the proof before anything is persisted; a failed upload leaves
    // no trace of the submission.
    let extension = file_extension(&proof.file_name);
    let storage_key = payment_proof_key(&registration_id, &extension);
    state
        .storage
        .upload(&storage_key, &proof.content_type, proof.bytes)
        .await
        .map_err(|e| AppError::StorageUpload(e.to_string()))?;

    // A proof nobody can retrieve is as bad as a failed upload, so a missing
    // signed URL fails the request rather than degrading to an empty string.
    let expiry = std::time::Duration::from_secs(state.config.signed_url_expiry_secs());
    let payment_proof_url = state
        .storage
        .signed_url(&storage_key, expiry)
        .await
        .map_err(|e| AppError::StorageUpload(format!("Signed URL generation failed: {}", e)))?;

    let registration = Registration {
        registration_id: registration_id.clone(),
        team_name,
        leader_name,
        leader_email,
        leader_contact,
        college_name,
        students,
        payment_proof_url,
        registered_at: Utc::now(),
        status: RegistrationStatus::Confirmed,
    };

    if let Err(err) = state.registrations.create(&registration).await {
        // Best-effort cleanup of the uploaded object; a failed delete leaves
        // an orphan and is only logged.
        let storage = state.storage.clone();
        let key = storage_key.clone();
        tokio::spawn(async move {
            match storage.delete(&key).await {
                Ok(()) => tracing::info!(key = %key, "Deleted orphaned payment proof"),
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "Failed to delete orphaned payment proof")
                }
            }
        });
        return Err(err.into());
    }

    // Notification is best-effort: failure is logged and never alters the
    // response or the persisted record.
    if let Some(email) = &state.email {
        if let Err(e) = email.send_confirmation(&registration).await {
            tracing::error!(
                registration_id = %registration.registration_id,
                leader_email = %registration.leader_email,
                error = %e,
                "Failed to send confirmation email"
            );
        } else {
            tracing::info!(
                registration_id = %registration.registration_id,
                leader_email = %registration.leader_email,
                "Confirmation email sent"
            );
        }
    } else {
        tracing::info!(
            registration_id = %registration.registration_id,
            team_name = %registration.team_name,
            "Email not configured - skipping confirmation"
        );
    }

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful".to_string(),
        registration_id,
    }))
}
