//! Webserver library for the live-coding assistant
//!
//! Classifies chat prompts, materializes canned file bundles to disk and
//! exposes both over a small JSON HTTP API.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::FileMaterializer;

// Re-export service implementations
pub use services::RealFileMaterializer;
