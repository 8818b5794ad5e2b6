//! Webserver state management
//!
//! Shared across handlers behind an `Arc`; the only mutable part is the
//! session registry, so nothing leaks between sessions.

use std::time::Instant;
use tokio::sync::RwLock;

use crate::core::{PromptClassifier, SessionContext, SessionRegistry};
use shared::{ProcessId, process_debug};

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub classifier: PromptClassifier,
    sessions: RwLock<SessionRegistry>,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            classifier: PromptClassifier::new(),
            sessions: RwLock::new(SessionRegistry::new(max_sessions)),
            server_start_time: Instant::now(),
        }
    }

    /// Remember the latest generation for a session
    pub async fn record_generation(&self, session_id: &str, context: SessionContext) {
        let evicted = self.sessions.write().await.record(session_id, context);
        if let Some(evicted) = evicted {
            process_debug!(ProcessId::current(), "🧹 Evicted session context: {}", evicted);
        }
    }

    pub async fn last_generation(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.read().await.last(session_id).cloned()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
