//! HTTP error response conversion
//!
//! Maps domain errors onto HTTP responses. `HttpAppError` exists because of
//! the orphan rule: we cannot implement `IntoResponse` (external trait) for
//! `AppError` (external type from clipvault-core).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use clipvault_core::{AppError, ErrorMetadata, LogLevel};
use clipvault_processing::ProcessingError;
use clipvault_storage::StorageError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (we impl for local HttpAppError to
// stay clear of the orphan rule).

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::PutFailed(msg) => AppError::Storage(msg),
            StorageError::SigningFailed(msg) => AppError::Signing(msg),
            StorageError::Entropy(msg) => AppError::Entropy(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

impl From<ProcessingError> for HttpAppError {
    fn from(err: ProcessingError) -> Self {
        let app = match err {
            ProcessingError::Probe(msg) => AppError::Probe(msg),
            ProcessingError::Remux(msg) => AppError::Remux(msg),
            ProcessingError::InvalidPath(msg) => AppError::Internal(msg),
            ProcessingError::Io(err) => AppError::Internal(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_put_failure_maps_to_storage_error() {
        let HttpAppError(app) = StorageError::PutFailed("put failed".to_string()).into();
        match app {
            AppError::Storage(msg) => assert_eq!(msg, "put failed"),
            other => panic!("expected Storage variant, got {:?}", other),
        }
    }

    #[test]
    fn signing_failure_maps_to_signing_error() {
        let HttpAppError(app) = StorageError::SigningFailed("no creds".to_string()).into();
        assert!(matches!(app, AppError::Signing(_)));
    }

    #[test]
    fn probe_failure_maps_to_probe_error() {
        let HttpAppError(app) = ProcessingError::Probe("no stream".to_string()).into();
        match app {
            AppError::Probe(msg) => assert_eq!(msg, "no stream"),
            other => panic!("expected Probe variant, got {:?}", other),
        }
    }

    #[test]
    fn remux_failure_maps_to_remux_error() {
        let HttpAppError(app) = ProcessingError::Remux("exit 1".to_string()).into();
        assert!(matches!(app, AppError::Remux(_)));
    }

    #[test]
    fn io_failures_map_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let HttpAppError(app) = StorageError::IoError(io).into();
        assert!(matches!(app, AppError::Internal(_)));
    }
}
