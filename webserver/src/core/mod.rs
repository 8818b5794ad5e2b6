//! Core business logic modules
//!
//! Pure logic with no I/O dependencies

pub mod classifier;
pub mod sessions;
pub mod templates;

// Re-export commonly used types
pub use classifier::{Classification, PromptClassifier, Turn};
pub use sessions::{DEFAULT_SESSION, SessionContext, SessionRegistry};
pub use templates::{INTENTS, Intent, Template};
