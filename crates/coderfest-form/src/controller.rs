//! Registration form state and transitions.

use coderfest_core::constants::{MAX_TEAM_SIZE, MIN_TEAM_SIZE};
use coderfest_core::StudentDetail;
use serde::{Deserialize, Serialize};

use crate::submit::{PaymentProof, RegistrationPayload, SubmitError, Submitter};

/// Which step of the flow the form is on. `Confirmed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "phase")]
pub enum Phase {
    Details,
    Payment,
    Confirmed { registration_id: String },
}

/// Leader/team text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TeamName,
    CollegeName,
    LeaderName,
    LeaderEmail,
    LeaderContact,
}

/// Per-student text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Email,
    Contact,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Team size must be between {MIN_TEAM_SIZE} and {MAX_TEAM_SIZE} members")]
    InvalidTeamSize(usize),

    #[error("No student at index {0}")]
    StudentIndexOutOfRange(usize),

    #[error("Please fill all team leader details")]
    MissingTeamDetails,

    #[error("Please fill all details for Student {0}")]
    MissingStudentDetails(usize),

    #[error("Please upload payment proof")]
    MissingPaymentProof,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Submission is only possible from the payment step")]
    WrongPhase,

    /// Server-side rejection, message passed through verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("Registration failed: {0}")]
    Transport(String),
}

/// In-memory draft state for one team registration.
///
/// All transitions are plain state mutation; nothing is validated eagerly
/// except where an operation's contract requires it. The draft is discarded
/// by the caller after a successful submission or navigation away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    team_size: usize,
    team_name: String,
    college_name: String,
    leader_name: String,
    leader_email: String,
    leader_contact: String,
    students: Vec<StudentDetail>,
    payment_proof: Option<PaymentProof>,
    phase: Phase,
    /// Advisory single-in-flight debounce; cleared when a submit settles.
    submitting: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Fresh draft with the default team size of five.
    pub fn new() -> Self {
        let mut students = Vec::with_capacity(MAX_TEAM_SIZE);
        students.resize_with(MAX_TEAM_SIZE, StudentDetail::empty);
        Self {
            team_size: MAX_TEAM_SIZE,
            team_name: String::new(),
            college_name: String::new(),
            leader_name: String::new(),
            leader_email: String::new(),
            leader_contact: String::new(),
            students,
            payment_proof: None,
            phase: Phase::Details,
            submitting: false,
        }
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn students(&self) -> &[StudentDetail] {
        &self.students
    }

    pub fn payment_proof(&self) -> Option<&PaymentProof> {
        self.payment_proof.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resize the student list. Entries at matching indices are preserved,
    /// new slots start empty, and shrinking truncates.
    pub fn set_team_size(&mut self, n: usize) -> Result<(), FormError> {
        if !(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&n) {
            return Err(FormError::InvalidTeamSize(n));
        }
        self.team_size = n;
        self.students.resize_with(n, StudentDetail::empty);
        Ok(())
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::TeamName => self.team_name = value,
            Field::CollegeName => self.college_name = value,
            Field::LeaderName => self.leader_name = value,
            Field::LeaderEmail => self.leader_email = value,
            Field::LeaderContact => self.leader_contact = value,
        }
    }

    pub fn update_student(
        &mut self,
        index: usize,
        field: StudentField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let student = self
            .students
            .get_mut(index)
            .ok_or(FormError::StudentIndexOutOfRange(index))?;
        let value = value.into();
        match field {
            StudentField::Name => student.name = value,
            StudentField::Email => student.email = value,
            StudentField::Contact => student.contact = value,
        }
        Ok(())
    }

    fn first_missing_requirement(&self) -> Option<FormError> {
        let leader_fields = [
            &self.team_name,
            &self.leader_name,
            &self.leader_email,
            &self.leader_contact,
            &self.college_name,
        ];
        if leader_fields.iter().any(|f| f.trim().is_empty()) {
            return Some(FormError::MissingTeamDetails);
        }
        for (i, student) in self.students.iter().take(self.team_size).enumerate() {
            if !student.is_complete() {
                return Some(FormError::MissingStudentDetails(i + 1));
            }
        }
        None
    }

    /// Check completeness of the details step. On success the form advances
    /// to the payment step; on failure the first missing requirement is
    /// reported and the phase is unchanged.
    pub fn validate_and_advance(&mut self) -> Result<(), FormError> {
        if let Some(err) = self.first_missing_requirement() {
            return Err(err);
        }
        self.phase = Phase::Payment;
        Ok(())
    }

    /// Record the chosen payment-proof file. Any file the picker yields is
    /// accepted.
    pub fn select_payment_proof(&mut self, proof: PaymentProof) {
        self.payment_proof = Some(proof);
    }

    /// Return from the payment step to the details step.
    pub fn back_to_details(&mut self) {
        if self.phase == Phase::Payment {
            self.phase = Phase::Details;
        }
    }

    /// Submit the draft. Fails locally, without any network call, when no
    /// payment proof is selected or a submission is already outstanding. On
    /// server rejection the message is surfaced verbatim and the form stays
    /// at the payment step for retry; on acceptance the form reaches the
    /// terminal `Confirmed` phase carrying the returned registration id.
    pub async fn submit(&mut self, submitter: &dyn Submitter) -> Result<String, FormError> {
        if self.phase != Phase::Payment {
            return Err(FormError::WrongPhase);
        }
        let proof = self
            .payment_proof
            .clone()
            .ok_or(FormError::MissingPaymentProof)?;
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }

        let payload = RegistrationPayload {
            team_name: self.team_name.clone(),
            leader_name: self.leader_name.clone(),
            leader_email: self.leader_email.clone(),
            leader_contact: self.leader_contact.clone(),
            college_name: self.college_name.clone(),
            students: self.students.clone(),
            payment_proof: proof,
        };

        self.submitting = true;
        let result = submitter.submit(&payload).await;
        self.submitting = false;

        match result {
            Ok(receipt) => {
                self.phase = Phase::Confirmed {
                    registration_id: receipt.registration_id.clone(),
                };
                Ok(receipt.registration_id)
            }
            Err(SubmitError::Rejected { message, .. }) => Err(FormError::Rejected(message)),
            Err(SubmitError::Transport(e)) => Err(FormError::Transport(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{SubmissionReceipt, Submitter};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn proof() -> PaymentProof {
        PaymentProof {
            file_name: "upi-screenshot.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn filled_form(team_size: usize) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_team_size(team_size).unwrap();
        form.update_field(Field::TeamName, "Null Pointers");
        form.update_field(Field::CollegeName, "SGSIT");
        form.update_field(Field::LeaderName, "Asha Verma");
        form.update_field(Field::LeaderEmail, "asha@example.com");
        form.update_field(Field::LeaderContact, "9876543210");
        for i in 0..team_size {
            form.update_student(i, StudentField::Name, format!("Student {}", i + 1))
                .unwrap();
            form.update_student(i, StudentField::Email, format!("s{}@example.com", i + 1))
                .unwrap();
            form.update_student(i, StudentField::Contact, format!("90000000{:02}", i))
                .unwrap();
        }
        form
    }

    /// Records payloads and accepts every submission.
    #[derive(Default)]
    struct AcceptingSubmitter {
        seen: Mutex<Vec<RegistrationPayload>>,
    }

    #[async_trait]
    impl Submitter for AcceptingSubmitter {
        async fn submit(
            &self,
            payload: &RegistrationPayload,
        ) -> Result<SubmissionReceipt, SubmitError> {
            self.seen.lock().unwrap().push(payload.clone());
            Ok(SubmissionReceipt {
                registration_id: "REG-1733500000000-ab12cd".to_string(),
                message: "Registration successful".to_string(),
            })
        }
    }

    /// Rejects every submission with a fixed server message.
    struct RejectingSubmitter;

    #[async_trait]
    impl Submitter for RejectingSubmitter {
        async fn submit(
            &self,
            _payload: &RegistrationPayload,
        ) -> Result<SubmissionReceipt, SubmitError> {
            Err(SubmitError::Rejected {
                status: 400,
                message: "Missing required fields: collegeName".to_string(),
            })
        }
    }

    /// Counts calls; used to prove local rejections never hit the network.
    #[derive(Default)]
    struct CountingSubmitter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Submitter for CountingSubmitter {
        async fn submit(
            &self,
            _payload: &RegistrationPayload,
        ) -> Result<SubmissionReceipt, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SubmitError::Transport("should not be called".to_string()))
        }
    }

    #[test]
    fn new_form_defaults_to_five_empty_students() {
        let form = RegistrationForm::new();
        assert_eq!(form.team_size(), 5);
        assert_eq!(form.students().len(), 5);
        assert_eq!(*form.phase(), Phase::Details);
        assert!(form.students().iter().all(|s| !s.is_complete()));
    }

    #[test]
    fn resize_preserves_prefix_and_resets_regrown_slots() {
        let mut form = filled_form(5);

        form.set_team_size(3).unwrap();
        assert_eq!(form.students().len(), 3);

        form.set_team_size(5).unwrap();
        assert_eq!(form.students().len(), 5);
        for i in 0..3 {
            assert_eq!(form.students()[i].name, format!("Student {}", i + 1));
        }
        assert_eq!(form.students()[3], StudentDetail::empty());
        assert_eq!(form.students()[4], StudentDetail::empty());
    }

    #[test]
    fn rejects_team_sizes_outside_range() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.set_team_size(2), Err(FormError::InvalidTeamSize(2)));
        assert_eq!(form.set_team_size(6), Err(FormError::InvalidTeamSize(6)));
        assert!(form.set_team_size(4).is_ok());
    }

    #[test]
    fn update_student_out_of_range_is_an_error() {
        let mut form = RegistrationForm::new();
        form.set_team_size(3).unwrap();
        assert_eq!(
            form.update_student(3, StudentField::Name, "X"),
            Err(FormError::StudentIndexOutOfRange(3))
        );
    }

    #[test]
    fn validate_reports_first_missing_requirement_and_keeps_phase() {
        let mut form = filled_form(3);
        form.update_field(Field::CollegeName, "");
        assert_eq!(
            form.validate_and_advance(),
            Err(FormError::MissingTeamDetails)
        );
        assert_eq!(*form.phase(), Phase::Details);

        form.update_field(Field::CollegeName, "SGSIT");
        form.update_student(1, StudentField::Contact, "").unwrap();
        assert_eq!(
            form.validate_and_advance(),
            Err(FormError::MissingStudentDetails(2))
        );
        assert_eq!(*form.phase(), Phase::Details);
    }

    #[test]
    fn validate_advances_to_payment_when_complete() {
        for size in 3..=5 {
            let mut form = filled_form(size);
            assert!(form.validate_and_advance().is_ok());
            assert_eq!(*form.phase(), Phase::Payment);
        }
    }

    #[tokio::test]
    async fn submit_without_proof_makes_no_network_call() {
        let mut form = filled_form(3);
        form.validate_and_advance().unwrap();

        let submitter = CountingSubmitter::default();
        let err = form.submit(&submitter).await.unwrap_err();
        assert_eq!(err, FormError::MissingPaymentProof);
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(*form.phase(), Phase::Payment);
    }

    #[tokio::test]
    async fn submit_from_details_phase_is_refused() {
        let mut form = filled_form(3);
        form.select_payment_proof(proof());
        let submitter = CountingSubmitter::default();
        assert_eq!(
            form.submit(&submitter).await.unwrap_err(),
            FormError::WrongPhase
        );
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submit_reaches_confirmed_with_exact_team_size() {
        for size in 3..=5 {
            let mut form = filled_form(size);
            form.validate_and_advance().unwrap();
            form.select_payment_proof(proof());

            let submitter = AcceptingSubmitter::default();
            let id = form.submit(&submitter).await.unwrap();
            assert_eq!(id, "REG-1733500000000-ab12cd");
            assert_eq!(
                *form.phase(),
                Phase::Confirmed {
                    registration_id: id.clone()
                }
            );

            let seen = submitter.seen.lock().unwrap();
            assert_eq!(seen.len(), 1);
            assert_eq!(seen[0].students.len(), size);
            assert_eq!(seen[0].team_name, "Null Pointers");
        }
    }

    #[tokio::test]
    async fn rejected_submit_surfaces_server_message_and_allows_retry() {
        let mut form = filled_form(4);
        form.validate_and_advance().unwrap();
        form.select_payment_proof(proof());

        let err = form.submit(&RejectingSubmitter).await.unwrap_err();
        assert_eq!(
            err,
            FormError::Rejected("Missing required fields: collegeName".to_string())
        );
        assert_eq!(*form.phase(), Phase::Payment);
        assert!(!form.is_submitting());

        // Retry against an accepting server succeeds.
        let id = form.submit(&AcceptingSubmitter::default()).await.unwrap();
        assert!(matches!(form.phase(), Phase::Confirmed { .. }));
        assert!(!id.is_empty());
    }

    #[test]
    fn draft_state_is_serializable() {
        let mut form = filled_form(3);
        form.validate_and_advance().unwrap();
        form.select_payment_proof(proof());

        let json = serde_json::to_string(&form).unwrap();
        let back: RegistrationForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back.team_size(), 3);
        assert_eq!(*back.phase(), Phase::Payment);
        assert_eq!(back.payment_proof().unwrap().file_name, "upi-screenshot.png");
    }
}
