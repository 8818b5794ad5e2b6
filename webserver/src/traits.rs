//! Service trait definitions for dependency injection
//!
//! All file system I/O is abstracted through these traits for testability

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::WebServerResult;
use shared::{FileBundle, FileListing};

/// Persists generated files to the flat output directory
#[mockall::automock]
#[async_trait]
pub trait FileMaterializer: Send + Sync {
    /// Write every file of the bundle in bundle order, overwriting unconditionally
    ///
    /// Returns the names written. A failure aborts the remaining writes;
    /// files already written stay on disk.
    async fn materialize(&self, bundle: &FileBundle) -> WebServerResult<Vec<String>>;

    /// Write a single file and return the path it was written to
    async fn write_file(&self, file_name: &str, content: &str) -> WebServerResult<PathBuf>;

    /// Scan the output directory; never fails, unreadable entries are skipped
    async fn list_files(&self) -> FileListing;

    /// Root directory files are written under
    fn output_dir(&self) -> PathBuf;
}
