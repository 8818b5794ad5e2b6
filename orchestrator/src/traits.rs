//! Trait definitions with mockall annotations for testing
//!
//! The generation orchestrator only talks to the outside world through
//! these seams: the server round-trip, the pacing clock and the chat log
//! store. Real implementations live in `services`.

use std::time::Duration;

use crate::core::ChatSession;
use crate::error::OrchestratorResult;
use shared::{GenerateRequest, GenerateResponse};

/// Client for the server's generation endpoint
#[mockall::automock]
#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Submit one prompt and return the decoded response envelope
    ///
    /// A transport failure or a non-success HTTP status is an
    /// `OrchestratorError::Upstream`.
    async fn generate(&self, request: GenerateRequest) -> OrchestratorResult<GenerateResponse>;
}

/// Source of UI pacing delays
///
/// Abstracted so tests can run the full state machine without sleeping.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Persistence for the chat log
#[mockall::automock]
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored log, or an empty session when nothing is stored yet
    async fn load(&self) -> OrchestratorResult<ChatSession>;

    /// Overwrite the stored log with `session`
    async fn save(&self, session: &ChatSession) -> OrchestratorResult<()>;
}
