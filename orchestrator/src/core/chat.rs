//! Append-only chat log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use shared::FileBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    System,
    Code,
    Normal,
    Response,
}

/// Summary of the files a generation produced
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    pub files_generated: Vec<String>,
    pub technologies: BTreeSet<String>,
    pub estimated_lines: usize,
}

impl MessageMetadata {
    pub fn from_bundle(bundle: &FileBundle) -> Self {
        Self {
            files_generated: bundle.names(),
            technologies: bundle
                .iter()
                .map(|(_, entry)| entry.language.technology().to_string())
                .collect(),
            estimated_lines: bundle.total_lines(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl ChatMessage {
    fn new(sender: Sender, content: String, kind: MessageKind, metadata: Option<MessageMetadata>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            content,
            timestamp: Utc::now(),
            kind,
            metadata,
        }
    }
}

/// Ordered, append-only message log for one chat
///
/// Messages are never edited or removed; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(Sender::User, text.into(), MessageKind::Normal, None))
    }

    pub fn append_ai(
        &mut self,
        text: impl Into<String>,
        kind: MessageKind,
        metadata: Option<MessageMetadata>,
    ) -> &ChatMessage {
        self.push(ChatMessage::new(Sender::Ai, text.into(), kind, metadata))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FileEntry, Language};

    #[test]
    fn test_append_preserves_order_and_ids() {
        let mut session = ChatSession::new();
        let first = session.append_user("build me a todo app").id.clone();
        let second = session.append_ai("done", MessageKind::Response, None).id.clone();

        assert_ne!(first, second);
        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Ai]);
        assert!(session.messages()[0].timestamp <= session.messages()[1].timestamp);
    }

    #[test]
    fn test_metadata_from_bundle() {
        let mut bundle = FileBundle::new();
        bundle.insert("index.html", FileEntry::new("<p>\n</p>", Language::Html));
        bundle.insert("script.js", FileEntry::new("a();", Language::Javascript));
        bundle.insert("app.js", FileEntry::new("b();", Language::Javascript));

        let metadata = MessageMetadata::from_bundle(&bundle);

        assert_eq!(metadata.files_generated, vec!["index.html", "script.js", "app.js"]);
        assert_eq!(metadata.technologies.len(), 2);
        assert_eq!(metadata.estimated_lines, 4);
    }

    #[test]
    fn test_wire_format() {
        let mut session = ChatSession::new();
        session.append_ai("hi", MessageKind::Code, Some(MessageMetadata::default()));

        let json = serde_json::to_value(&session).unwrap();
        let message = &json["messages"][0];
        assert_eq!(message["sender"], "ai");
        assert_eq!(message["kind"], "code");
        assert_eq!(message["metadata"]["estimatedLines"], 0);
    }
}
