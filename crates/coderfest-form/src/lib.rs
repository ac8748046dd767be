//! Coder Fest Form Library
//!
//! The registration form controller: an explicit, serializable state object
//! with reducer-style transitions. A registration draft moves through a
//! two-phase flow (details entry, then payment-proof upload) before being
//! handed to a [`Submitter`] for the actual HTTP submission.
//!
//! The controller owns only transient pre-submission draft state; the server
//! owns record creation.

pub mod controller;
pub mod submit;

// Re-export commonly used types
pub use controller::{Field, FormError, Phase, RegistrationForm, StudentField};
pub use submit::{PaymentProof, RegistrationPayload, SubmissionReceipt, SubmitError, Submitter};
