//! Error types module
//!
//! All errors are unified under the `AppError` enum, which can represent
//! validation, storage, persistence, and auth failures. HTTP response mapping
//! lives in the API crate; errors self-describe their presentation through
//! the `ErrorMetadata` trait.
//!
//! Client-input errors carry their message to the client verbatim;
//! upstream-service errors stay opaque (fixed client message, details logged
//! server-side only). Notification failures never become an `AppError` at
//! all; they are absorbed at the call site.
//!
//! The `Database` variant carries a `sqlx::Error` source when the `sqlx`
//! feature is enabled; otherwise it degrades to a string.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures
    Debug,
    /// Recoverable issues
    Warn,
    /// Unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage upload error: {0}")]
    StorageUpload(String),

    /// Record persistence failed. The message is handler-authored and
    /// client-safe; the underlying cause is logged where the error arises.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Serialization error: {}", err))
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Unauthorized(_) => 401,
            AppError::NotFound(_) => 404,
            AppError::PayloadTooLarge(_) => 413,
            AppError::StorageUpload(_)
            | AppError::Persistence(_)
            | AppError::Database(_)
            | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::StorageUpload(_) => "STORAGE_UPLOAD_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Client-input errors pass through verbatim.
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            // Persistence messages are handler-authored and client-safe.
            AppError::Persistence(msg) => msg.clone(),
            // Upstream-service errors are opaque to the client.
            AppError::StorageUpload(_) => "Failed to upload payment proof".to_string(),
            AppError::Database(_) => "Failed to store registration data".to_string(),
            AppError::Internal(_) => "Registration failed".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            AppError::StorageUpload(_)
                | AppError::Persistence(_)
                | AppError::Database(_)
                | AppError::Internal(_)
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Unauthorized(_) | AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::StorageUpload(_)
            | AppError::Persistence(_)
            | AppError::Database(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = AppError::Validation("Missing required fields: teamName".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.client_message(), "Missing required fields: teamName");
        assert!(!err.is_sensitive());
    }

    #[test]
    fn upstream_errors_are_opaque() {
        let err = AppError::StorageUpload("s3 timeout".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Failed to upload payment proof");

        let err = AppError::Persistence("Failed to store registration data".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Failed to store registration data");
    }
}
