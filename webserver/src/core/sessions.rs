//! Session-scoped generation context
//!
//! Each client session remembers its most recent generation so that a
//! follow-up listing call sees that session's files and nobody else's.

use chrono::{DateTime, Utc};
use shared::FileBundle;
use std::collections::{HashMap, VecDeque};

/// Session used when a request carries no session header
pub const DEFAULT_SESSION: &str = "default";

/// What the last generation for one session produced
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub prompt: String,
    pub bundle: FileBundle,
    pub written: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(prompt: impl Into<String>, bundle: FileBundle, written: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            bundle,
            written,
            updated_at: Utc::now(),
        }
    }
}

/// Bounded map of session id to last generation, evicting least recently updated
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<String, SessionContext>,
    recency: VecDeque<String>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            recency: VecDeque::new(),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Replace the session's context; returns the evicted session id, if any
    pub fn record(&mut self, session_id: &str, context: SessionContext) -> Option<String> {
        self.recency.retain(|id| id != session_id);
        self.recency.push_back(session_id.to_string());
        self.sessions.insert(session_id.to_string(), context);

        if self.sessions.len() > self.max_sessions {
            if let Some(evicted) = self.recency.pop_front() {
                self.sessions.remove(&evicted);
                return Some(evicted);
            }
        }
        None
    }

    pub fn last(&self, session_id: &str) -> Option<&SessionContext> {
        self.sessions.get(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FileEntry, Language};

    fn context(prompt: &str) -> SessionContext {
        let mut bundle = FileBundle::new();
        bundle.insert("a.html", FileEntry::new("x", Language::Html));
        SessionContext::new(prompt, bundle, vec!["a.html".to_string()])
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut registry = SessionRegistry::new(8);
        registry.record("alice", context("todo"));
        registry.record("bob", context("calculator"));

        assert_eq!(registry.last("alice").unwrap().prompt, "todo");
        assert_eq!(registry.last("bob").unwrap().prompt, "calculator");
        assert!(registry.last("carol").is_none());
    }

    #[test]
    fn test_record_replaces_previous_context() {
        let mut registry = SessionRegistry::new(8);
        registry.record(DEFAULT_SESSION, context("first"));
        registry.record(DEFAULT_SESSION, context("second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.last(DEFAULT_SESSION).unwrap().prompt, "second");
    }

    #[test]
    fn test_least_recently_updated_is_evicted() {
        let mut registry = SessionRegistry::new(2);
        assert_eq!(registry.record("a", context("1")), None);
        assert_eq!(registry.record("b", context("2")), None);
        // Touch "a" so "b" becomes the oldest
        assert_eq!(registry.record("a", context("3")), None);
        assert_eq!(registry.record("c", context("4")), Some("b".to_string()));

        assert!(registry.last("b").is_none());
        assert_eq!(registry.len(), 2);
    }
}
