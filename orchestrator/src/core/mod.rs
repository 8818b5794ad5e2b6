//! Headless building blocks of a generation attempt

pub mod cancel;
pub mod chat;
pub mod events;
pub mod fallback;
pub mod live_coding;
pub mod stages;

pub use cancel::CancelToken;
pub use chat::{ChatMessage, ChatSession, MessageKind, MessageMetadata, Sender};
pub use events::{CancelPoint, GenerationEvent};
pub use live_coding::{Complexity, LiveCodingState};
pub use stages::GenerationStage;
