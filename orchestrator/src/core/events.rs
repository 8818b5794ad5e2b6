//! Typed event stream emitted by the generation orchestrator
//!
//! The rendering layer subscribes to these; the state machine itself never
//! prints anything.

use serde::Serialize;

use super::live_coding::Complexity;
use super::stages::GenerationStage;
use shared::Language;

/// Where a cancelled generation stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "at", rename_all = "camelCase")]
pub enum CancelPoint {
    Stage { stage: GenerationStage },
    /// Stages finished but the server had not answered yet
    AwaitingResponse,
    File { file_name: String },
    Line { file_name: String, line: usize },
    BeforeCompletion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GenerationEvent {
    Submitted {
        prompt: String,
    },
    StageStarted {
        stage: GenerationStage,
        progress: u8,
    },
    StageCompleted {
        stage: GenerationStage,
        progress: u8,
    },
    /// The server call failed and canned content is being used instead
    FallbackEngaged {
        reason: String,
    },
    FileStarted {
        file_name: String,
        language: Language,
        total_lines: usize,
        complexity: Complexity,
    },
    LiveUpdate {
        file_name: String,
        line: String,
        lines_typed: usize,
        progress: u8,
    },
    FileCompleted {
        file_name: String,
        lines: usize,
    },
    Completed {
        message_id: String,
        files: Vec<String>,
    },
    Cancelled {
        point: CancelPoint,
    },
}

impl GenerationEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationEvent::Completed { .. } | GenerationEvent::Cancelled { .. })
    }
}
