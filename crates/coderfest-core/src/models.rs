//! Domain models and API response types.
//!
//! Wire and persisted JSON both use camelCase field names, matching the KV
//! record layout consumed by the organizer tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One team member's details. No cross-record uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDetail {
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl StudentDetail {
    /// An empty slot, used when growing the form's student list.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            contact: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.contact.trim().is_empty()
    }
}

/// Registration lifecycle state. Registrations are created confirmed and
/// never transition afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Confirmed,
}

/// A team's accepted submission. Created once by the submission handler,
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub registration_id: String,
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_contact: String,
    pub college_name: String,
    pub students: Vec<StudentDetail>,
    /// Signed, time-bounded reference to the uploaded payment proof.
    pub payment_proof_url: String,
    pub registered_at: DateTime<Utc>,
    pub status: RegistrationStatus,
}

/// Successful `POST /register` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub registration_id: String,
}

/// `GET /registrations` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationsResponse {
    pub success: bool,
    pub registrations: Vec<Registration>,
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
