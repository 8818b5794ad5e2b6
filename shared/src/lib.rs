//! Shared types for the live-coding assistant
//!
//! Contains the wire envelopes exchanged between the orchestrator (client)
//! and the webserver, plus the file bundle model both sides operate on.

pub mod codeblocks;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Generation endpoint
    AppPlan, GenerateRequest, GenerateResponse,
    // File endpoints
    CreateFileRequest, CreateFileResponse, FileListing, ListedFile,
    // Error envelope
    ErrorResponse,
};
