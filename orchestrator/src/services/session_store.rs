//! JSON file persistence for the chat log
//!
//! The whole log is rewritten on every save; there is no incremental append.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::ChatSession;
use crate::error::OrchestratorResult;
use crate::traits::SessionStore;
use shared::{ProcessId, process_debug};

/// Chat log stored as a single JSON document
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> OrchestratorResult<ChatSession> {
        if fs::metadata(&self.path).await.is_err() {
            return Ok(ChatSession::new());
        }

        let raw = fs::read_to_string(&self.path).await?;
        let session: ChatSession = serde_json::from_str(&raw)?;
        process_debug!(
            ProcessId::current(),
            "📂 Loaded {} chat messages from {}",
            session.len(),
            self.path.display()
        );
        Ok(session)
    }

    async fn save(&self, session: &ChatSession) -> OrchestratorResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).await?;
        process_debug!(
            ProcessId::current(),
            "💾 Saved {} chat messages to {}",
            session.len(),
            self.path.display()
        );
        Ok(())
    }
}
