//! Submission seam between the form controller and the HTTP client.

use async_trait::async_trait;
use coderfest_core::StudentDetail;
use serde::{Deserialize, Serialize};

/// The payment-proof file as selected by the registrant. No size or type
/// validation is enforced here; UI guidance is advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProof {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A complete submission as packaged by the form controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPayload {
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_contact: String,
    pub college_name: String,
    pub students: Vec<StudentDetail>,
    pub payment_proof: PaymentProof,
}

/// Receipt returned by the server on acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub registration_id: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server rejected the submission; the message is passed through
    /// verbatim to the registrant.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Anything that can deliver a registration to the submission endpoint.
/// Implemented by the API client; tests substitute their own.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &RegistrationPayload)
        -> Result<SubmissionReceipt, SubmitError>;
}
