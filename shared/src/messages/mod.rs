//! HTTP message envelopes exchanged between the orchestrator and the webserver
//!
//! Field names follow the camelCase JSON the browser front-end already speaks.

pub mod files;
pub mod generate;

pub use files::*;
pub use generate::*;

use serde::{Deserialize, Serialize};

/// JSON error envelope returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl ErrorResponse {
    /// Envelope for rejected input (no `success` field)
    pub fn validation(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: None,
        }
    }

    /// Envelope for internal failures
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: Some(false),
        }
    }
}
