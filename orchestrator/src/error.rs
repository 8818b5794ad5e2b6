//! Orchestrator-specific error types

use shared::SharedError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Upstream request failed: {message}")]
    Upstream { message: String },

    #[error("Upstream request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrchestratorError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }

    /// Failures that send a generation down the offline path
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Timeout { .. })
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
