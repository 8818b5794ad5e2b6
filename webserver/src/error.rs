//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::{ErrorResponse, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Failed to {operation} {path}: {source}")]
    FileSystem {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebServerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn file_system(operation: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileSystem {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Rejected input rather than a server-side failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WebServerError::Validation { .. } | WebServerError::SharedError(SharedError::InvalidFileName { .. })
        )
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if self.is_validation() {
            ErrorResponse::validation(self.to_string())
        } else {
            ErrorResponse::failure(self.to_string())
        };
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WebServerError::validation("Prompt is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        let invalid_name = WebServerError::from(SharedError::InvalidFileName {
            name: "../x".to_string(),
            reason: "parent directory segment".to_string(),
        });
        assert_eq!(invalid_name.status_code(), StatusCode::BAD_REQUEST);

        let io = WebServerError::file_system(
            "write",
            "out/index.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(io.to_string().contains("out/index.html"));
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        assert_eq!(WebServerError::validation("Prompt is required").to_string(), "Prompt is required");
    }
}
