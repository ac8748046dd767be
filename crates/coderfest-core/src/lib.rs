//! Coder Fest Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation shared across all Coder Fest registration components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    HealthResponse, RegisterResponse, Registration, RegistrationStatus, RegistrationsResponse,
    StudentDetail,
};
pub use storage_types::{KvBackend, StorageBackend};
