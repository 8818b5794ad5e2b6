//! File endpoint messages (`POST /files`, `GET /files`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Language;

/// Request body for `POST /files`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CreateFileRequest {
    /// Language given by the caller, otherwise derived from the file extension
    pub fn resolved_language(&self, file_name: &str) -> Language {
        match self.language.as_deref() {
            Some(alias) => Language::from_alias(alias),
            None => Language::from_path(file_name),
        }
    }
}

/// Response body for a successful `POST /files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileResponse {
    pub success: bool,
    pub file_name: String,
    pub path: String,
}

/// A file found on disk by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedFile {
    pub content: String,
    #[serde(rename = "type")]
    pub file_type: Language,
}

/// Response body for `GET /files`, keyed by path relative to the output directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub files: BTreeMap<String, ListedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_language() {
        let explicit = CreateFileRequest {
            file_name: Some("notes".to_string()),
            content: Some("x".to_string()),
            language: Some("py".to_string()),
        };
        assert_eq!(explicit.resolved_language("notes"), Language::Python);

        let derived = CreateFileRequest::default();
        assert_eq!(derived.resolved_language("app.ts"), Language::Typescript);
    }

    #[test]
    fn test_empty_listing_shape() {
        let json = serde_json::to_string(&FileListing::default()).unwrap();
        assert_eq!(json, r#"{"files":{}}"#);
    }
}
