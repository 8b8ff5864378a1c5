//! Error types module
//!
//! All failures in the upload pipeline are unified under `AppError`. Each
//! variant carries enough context to identify the stage that failed, and the
//! `ErrorMetadata` impl maps it to an HTTP status, a machine-readable code
//! and a log level.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures
    Debug,
    /// Recoverable issues, e.g. payload limits
    Warn,
    /// Unexpected failures
    Error,
}

/// Metadata describing how an error should be presented over HTTP.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;

    /// Client-facing message
    fn client_message(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Probe failed: {0}")]
    Probe(String),

    #[error("Remux failed: {0}")]
    Remux(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Malformed storage reference: {0}")]
    MalformedReference(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// Client messages stay per-variant for dynamic content.
fn static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::BadRequest(_) => (400, "BAD_REQUEST", LogLevel::Debug),
        AppError::Unauthorized(_) => (401, "UNAUTHORIZED", LogLevel::Debug),
        AppError::Forbidden(_) => (403, "FORBIDDEN", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Warn),
        // The probe rejecting a file means the uploaded bytes are not a
        // readable container, so the input is at fault.
        AppError::Probe(_) => (400, "PROBE_FAILED", LogLevel::Warn),
        AppError::Remux(_) => (500, "REMUX_FAILED", LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Signing(_) => (500, "SIGNING_ERROR", LogLevel::Error),
        AppError::Entropy(_) => (500, "ENTROPY_FAILURE", LogLevel::Error),
        AppError::MalformedReference(_) => (400, "MALFORMED_REFERENCE", LogLevel::Warn),
        AppError::Database(_) => (500, "DATABASE_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            // Internal messages may carry paths or backend detail; keep the
            // client-facing text generic for server-side failures.
            AppError::Storage(_) => "Storage backend error".to_string(),
            AppError::Signing(_) => "Failed to sign access URL".to_string(),
            AppError::Entropy(_) => "Internal error".to_string(),
            AppError::Database(_) => "Database error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::Remux(_) => "Video processing failed".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_fault_attribution() {
        assert_eq!(
            AppError::InvalidInput("bad".into()).http_status_code(),
            400
        );
        assert_eq!(AppError::Unauthorized("no".into()).http_status_code(), 401);
        assert_eq!(
            AppError::PayloadTooLarge("big".into()).http_status_code(),
            413
        );
        // Probe failures blame the input, remux failures blame the tooling.
        assert_eq!(AppError::Probe("x".into()).http_status_code(), 400);
        assert_eq!(AppError::Remux("x".into()).http_status_code(), 500);
        assert_eq!(AppError::Storage("x".into()).http_status_code(), 500);
        assert_eq!(
            AppError::MalformedReference("x".into()).http_status_code(),
            400
        );
    }

    #[test]
    fn server_side_failures_hide_detail_from_clients() {
        let err = AppError::Storage("s3 put to bucket acme failed".into());
        assert!(!err.client_message().contains("acme"));
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
