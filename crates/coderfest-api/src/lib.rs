//! Coder Fest API Library
//!
//! This crate provides the HTTP handlers, auth middleware, email service,
//! and application setup for the registration API.

// Module declarations
pub mod auth;
pub mod error;
pub mod handlers;
pub mod registration_id;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
