//! Tests for JsonSessionStore

use tempfile::TempDir;
use tokio::fs;

use crate::core::{ChatSession, MessageKind, MessageMetadata};
use crate::error::OrchestratorError;
use crate::services::JsonSessionStore;
use crate::traits::SessionStore;

#[tokio::test]
async fn test_missing_file_loads_empty_session() {
    let temp = TempDir::new().unwrap();
    let store = JsonSessionStore::new(temp.path().join("chat.json"));

    let session = store.load().await.unwrap();

    assert!(session.is_empty());
}

#[tokio::test]
async fn test_save_then_load_preserves_order_and_ids() {
    let temp = TempDir::new().unwrap();
    let store = JsonSessionStore::new(temp.path().join("nested/chat.json"));

    let mut session = ChatSession::new();
    session.append_user("build me a todo app");
    let metadata = MessageMetadata {
        files_generated: vec!["index.html".to_string(), "style.css".to_string()],
        ..MessageMetadata::default()
    };
    session.append_ai("Generated 2 file(s)", MessageKind::Code, Some(metadata));

    store.save(&session).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, session);
    assert_eq!(loaded.messages()[1].metadata.as_ref().unwrap().files_generated.len(), 2);
}

#[tokio::test]
async fn test_save_overwrites_whole_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("chat.json");
    let store = JsonSessionStore::new(&path);

    let mut session = ChatSession::new();
    session.append_user("one");
    store.save(&session).await.unwrap();
    session.append_user("two");
    store.save(&session).await.unwrap();

    assert_eq!(store.load().await.unwrap().len(), 2);
    let raw = fs::read_to_string(&path).await.unwrap();
    assert_eq!(raw.matches("\"sender\"").count(), 2);
}

#[tokio::test]
async fn test_corrupt_file_is_json_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("chat.json");
    fs::write(&path, "{ not json").await.unwrap();

    let err = JsonSessionStore::new(&path).load().await.unwrap_err();

    assert!(matches!(err, OrchestratorError::JsonError(_)));
}
