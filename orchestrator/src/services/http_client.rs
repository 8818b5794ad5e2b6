//! HTTP client for the webserver's generation endpoint

use async_trait::async_trait;
use url::Url;

use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::GenerationClient;
use shared::{GenerateRequest, GenerateResponse, ProcessId, process_debug};

/// Header the webserver uses to scope per-session context
pub const SESSION_HEADER: &str = "x-session-id";

/// Real generation client talking to `POST {base}/generate`
#[derive(Debug, Clone)]
pub struct RealGenerationClient {
    client: reqwest::Client,
    endpoint: Url,
    session_id: Option<String>,
}

impl RealGenerationClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`)
    pub fn new(base_url: &str) -> OrchestratorResult<Self> {
        let mut base =
            Url::parse(base_url).map_err(|e| OrchestratorError::config(format!("Invalid server URL {base_url}: {e}")))?;
        // Keep any path prefix when joining the endpoint
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join("generate")
            .map_err(|e| OrchestratorError::config(format!("Invalid server URL {base_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            session_id: None,
        })
    }

    /// Tag every request with a session id
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationClient for RealGenerationClient {
    async fn generate(&self, request: GenerateRequest) -> OrchestratorResult<GenerateResponse> {
        process_debug!(ProcessId::current(), "📤 POST {}", self.endpoint);

        let mut builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(session_id) = &self.session_id {
            builder = builder.header(SESSION_HEADER, session_id);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| OrchestratorError::upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OrchestratorError::upstream(format!(
                "server returned status {}",
                response.status()
            )));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| OrchestratorError::upstream(format!("Failed to parse response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        let client = RealGenerationClient::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:3000/generate");

        let prefixed = RealGenerationClient::new("http://example.com/assistant").unwrap();
        assert_eq!(prefixed.endpoint().as_str(), "http://example.com/assistant/generate");
    }

    #[test]
    fn test_invalid_base_is_config_error() {
        let err = RealGenerationClient::new("not a url").unwrap_err();
        assert!(matches!(err, OrchestratorError::ConfigurationError { .. }));
    }
}
