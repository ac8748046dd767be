//! Domain methods for the registration API client.
//!
//! Response types are re-exported from `coderfest_core::models`; the client
//! adds the multipart packaging and the [`Submitter`] implementation used by
//! the form controller.

use crate::ApiClient;
use anyhow::Result;
use async_trait::async_trait;
use coderfest_core::models::{HealthResponse, RegisterResponse, Registration, RegistrationsResponse};
use coderfest_form::{RegistrationPayload, SubmissionReceipt, SubmitError, Submitter};

impl ApiClient {
    /// Submit a registration as a multipart form, mirroring the submission
    /// handler's contract (seven parts, `students` JSON-encoded).
    pub async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisterResponse, SubmitError> {
        let students_json = serde_json::to_string(&payload.students)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let proof = reqwest::multipart::Part::bytes(payload.payment_proof.bytes.clone())
            .file_name(payload.payment_proof.file_name.clone())
            .mime_str(&payload.payment_proof.content_type)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("teamName", payload.team_name.clone())
            .text("leaderName", payload.leader_name.clone())
            .text("leaderEmail", payload.leader_email.clone())
            .text("leaderContact", payload.leader_contact.clone())
            .text("collegeName", payload.college_name.clone())
            .text("students", students_json)
            .part("paymentProof", proof);

        let url = format!("{}/register", self.base_url());
        let response = self
            .client()
            .post(&url)
            .bearer_auth(self.token())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Pass the server's error message through verbatim.
            let message = match response.json::<serde_json::Value>().await {
                Ok(body) => body
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Registration failed")
                    .to_string(),
                Err(_) => format!("Registration failed with status {}", status),
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))
    }

    /// Fetch every registration (admin read path; unfiltered, unpaginated).
    pub async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let response: RegistrationsResponse = self.get_json("/registrations").await?;
        Ok(response.registrations)
    }

    /// Health probe.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json("/health").await
    }
}

#[async_trait]
impl Submitter for ApiClient {
    async fn submit(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let response = self.register(payload).await?;
        Ok(SubmissionReceipt {
            registration_id: response.registration_id,
            message: response.message,
        })
    }
}
