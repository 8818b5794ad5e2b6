//! Generation endpoint messages (`POST /generate`)

use serde::{Deserialize, Serialize};

use crate::types::{FileBundle, RequestType};

/// Request body for `POST /generate`
///
/// Both fields are optional on the wire so that a missing prompt can be
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, request_type: RequestType) -> Self {
        Self {
            prompt: Some(prompt.into()),
            request_type: Some(request_type),
        }
    }

    /// Prompt text if present and not blank
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn request_type(&self) -> RequestType {
        self.request_type.unwrap_or_default()
    }
}

/// Structured plan returned for `plan` turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPlan {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Response body for `POST /generate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub response: String,
    pub success: bool,
    #[serde(default)]
    pub files: FileBundle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_build_button: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_plan: Option<AppPlan>,
}
