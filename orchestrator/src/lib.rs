//! Client side of the live-coding assistant
//!
//! Sends prompts to the webserver and replays each answer as a staged,
//! typed, cancellable reveal. The state machine is headless and reports
//! through a typed event stream; `render` turns that stream into terminal
//! output for the binary.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::OrchestratorConfig;
pub use core::{
    CancelPoint, CancelToken, ChatMessage, ChatSession, GenerationEvent, GenerationStage, LiveCodingState,
    MessageKind, MessageMetadata, Sender,
};
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::{GenerationOrchestrator, GenerationOutcome};
pub use traits::{GenerationClient, Pacer, SessionStore};
