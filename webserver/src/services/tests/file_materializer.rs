//! Tests for RealFileMaterializer
//!
//! Cover bundle writes, overwrite idempotence, partial failure without
//! rollback, and the listing scan.

use tokio::fs;

use super::common::{small_bundle, temp_materializer};
use crate::error::WebServerError;
use crate::traits::FileMaterializer;
use shared::{FileBundle, FileEntry, Language};

#[tokio::test]
async fn test_materialize_writes_in_bundle_order() {
    let (materializer, temp) = temp_materializer();
    let mut bundle = FileBundle::new();
    bundle.insert("index.html", FileEntry::new("<h1>hi</h1>", Language::Html));
    bundle.insert("js/app.js", FileEntry::new("console.log(1);", Language::Javascript));
    bundle.insert("css/deep/site.css", FileEntry::new("body{}", Language::Css));

    let written = materializer.materialize(&bundle).await.unwrap();

    assert_eq!(written, vec!["index.html", "js/app.js", "css/deep/site.css"]);
    let nested = fs::read_to_string(temp.path().join("css/deep/site.css")).await.unwrap();
    assert_eq!(nested, "body{}");
}

#[tokio::test]
async fn test_materialize_is_idempotent() {
    let (materializer, temp) = temp_materializer();
    let bundle = small_bundle();

    materializer.materialize(&bundle).await.unwrap();
    let first = fs::read(temp.path().join("a.html")).await.unwrap();
    materializer.materialize(&bundle).await.unwrap();
    let second = fs::read(temp.path().join("a.html")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(temp.path().join("b.css")).await.unwrap(), "y");
}

#[tokio::test]
async fn test_materialize_overwrites_existing_content() {
    let (materializer, temp) = temp_materializer();
    fs::write(temp.path().join("a.html"), "old content that is longer").await.unwrap();

    materializer.materialize(&small_bundle()).await.unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("a.html")).await.unwrap(), "x");
}

#[tokio::test]
async fn test_failure_aborts_remaining_writes_without_rollback() {
    let (materializer, temp) = temp_materializer();
    // A directory where a file should go makes the second write fail
    fs::create_dir_all(temp.path().join("blocked")).await.unwrap();

    let mut bundle = FileBundle::new();
    bundle.insert("first.txt", FileEntry::new("1", Language::Text));
    bundle.insert("blocked", FileEntry::new("2", Language::Text));
    bundle.insert("third.txt", FileEntry::new("3", Language::Text));

    let result = materializer.materialize(&bundle).await;

    assert!(matches!(result, Err(WebServerError::FileSystem { .. })));
    assert!(temp.path().join("first.txt").exists(), "committed writes stay");
    assert!(!temp.path().join("third.txt").exists(), "remaining writes are skipped");
}

#[tokio::test]
async fn test_unsafe_names_rejected_before_any_write() {
    let (materializer, temp) = temp_materializer();
    let mut bundle = FileBundle::new();
    bundle.insert("ok.txt", FileEntry::new("fine", Language::Text));
    bundle.insert("../escape.txt", FileEntry::new("bad", Language::Text));

    let result = materializer.materialize(&bundle).await;

    let err = result.unwrap_err();
    assert!(err.is_validation());
    assert!(!temp.path().join("ok.txt").exists());
}

#[tokio::test]
async fn test_write_file_returns_path() {
    let (materializer, temp) = temp_materializer();

    let path = materializer.write_file("notes/todo.md", "- item").await.unwrap();

    assert!(path.ends_with("notes/todo.md"));
    assert_eq!(fs::read_to_string(temp.path().join("notes/todo.md")).await.unwrap(), "- item");
    assert!(materializer.write_file("/abs.txt", "x").await.unwrap_err().is_validation());
}

#[tokio::test]
async fn test_listing_empty_directory() {
    let (materializer, _temp) = temp_materializer();
    assert!(materializer.list_files().await.files.is_empty());
}

#[tokio::test]
async fn test_listing_after_materialize() {
    let (materializer, _temp) = temp_materializer();
    materializer.materialize(&small_bundle()).await.unwrap();

    let listing = materializer.list_files().await;

    assert_eq!(listing.files.len(), 2);
    assert_eq!(listing.files["a.html"].content, "x");
    assert_eq!(listing.files["a.html"].file_type, Language::Html);
    assert_eq!(listing.files["b.css"].content, "y");
}

#[tokio::test]
async fn test_listing_skips_hidden_and_unreadable() {
    let (materializer, temp) = temp_materializer();
    fs::write(temp.path().join(".env"), "SECRET=1").await.unwrap();
    fs::create_dir_all(temp.path().join(".git")).await.unwrap();
    fs::write(temp.path().join(".git/HEAD"), "ref").await.unwrap();
    fs::write(temp.path().join("binary.bin"), [0xff_u8, 0xfe, 0x00]).await.unwrap();
    fs::create_dir_all(temp.path().join("src")).await.unwrap();
    fs::write(temp.path().join("src/main.py"), "print('hi')").await.unwrap();

    let listing = materializer.list_files().await;

    assert_eq!(listing.files.keys().collect::<Vec<_>>(), vec!["src/main.py"]);
    assert_eq!(listing.files["src/main.py"].file_type, Language::Python);
}

#[tokio::test]
async fn test_listing_missing_output_directory() {
    let (_, temp) = temp_materializer();
    let materializer = crate::services::RealFileMaterializer::with_output_dir(temp.path().join("never-created"));
    assert!(materializer.list_files().await.files.is_empty());
}
