//! Service implementations
//!
//! Real implementations of the orchestrator's service traits.

pub mod http_client;
pub mod pacer;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use http_client::RealGenerationClient;
pub use pacer::TokioPacer;
pub use session_store::JsonSessionStore;
