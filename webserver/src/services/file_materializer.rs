//! File materializer service implementation
//!
//! Writes generated bundles to the output directory and scans it back for
//! the listing endpoint. Writes are whole-file overwrites with no locking:
//! concurrent requests for the same name race and the last write wins.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::{DirEntry, WalkDir};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::FileMaterializer;
use shared::{FileBundle, FileListing, Language, ListedFile, ProcessId, process_debug, process_warn, validate_file_name};

/// Real file materializer rooted at an output directory
#[derive(Debug, Clone)]
pub struct RealFileMaterializer {
    output_dir: PathBuf,
}

impl RealFileMaterializer {
    /// Create materializer writing to ./generated
    pub fn new() -> Self {
        Self::with_output_dir(PathBuf::from("./generated"))
    }

    /// Create with custom output directory
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    async fn write_one(&self, file_name: &str, content: &str) -> WebServerResult<PathBuf> {
        let path = self.output_dir.join(file_name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| WebServerError::file_system("create directory", parent.display().to_string(), e))?;
        }

        fs::write(&path, content)
            .await
            .map_err(|e| WebServerError::file_system("write", path.display().to_string(), e))?;

        process_debug!(ProcessId::current(), "📝 Wrote file: {}", path.display());
        Ok(path)
    }
}

impl Default for RealFileMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileMaterializer for RealFileMaterializer {
    async fn materialize(&self, bundle: &FileBundle) -> WebServerResult<Vec<String>> {
        // Reject the whole bundle before touching the disk if any name escapes the root
        for (name, _) in bundle.iter() {
            validate_file_name(name)?;
        }

        let mut written = Vec::with_capacity(bundle.len());
        for (name, entry) in bundle.iter() {
            self.write_one(name, &entry.content).await?;
            written.push(name.to_string());
        }

        process_debug!(
            ProcessId::current(),
            "💾 Materialized {} files into {}",
            written.len(),
            self.output_dir.display()
        );
        Ok(written)
    }

    async fn write_file(&self, file_name: &str, content: &str) -> WebServerResult<PathBuf> {
        validate_file_name(file_name)?;
        let path = self.write_one(file_name, content).await?;
        Ok(fs::canonicalize(&path).await.unwrap_or(path))
    }

    async fn list_files(&self) -> FileListing {
        let root = self.output_dir.clone();
        match tokio::task::spawn_blocking(move || scan_directory(&root)).await {
            Ok(listing) => listing,
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ File listing task failed: {}", e);
                FileListing::default()
            }
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir.clone()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map(|name| name.starts_with('.')).unwrap_or(false)
}

/// Path relative to `root` with `/` separators regardless of platform
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    parts.map(|parts| parts.join("/"))
}

fn scan_directory(root: &Path) -> FileListing {
    let mut files = BTreeMap::new();
    if !root.is_dir() {
        return FileListing { files };
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(key) = relative_key(root, entry.path()) else {
            continue;
        };
        // Unreadable and non-UTF-8 files are skipped silently
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };

        let file_type = Language::from_path(&key);
        files.insert(key, ListedFile { content, file_type });
    }

    FileListing { files }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_key_uses_forward_slashes() {
        let root = Path::new("/tmp/out");
        let path = root.join("css").join("site.css");
        assert_eq!(relative_key(root, &path).as_deref(), Some("css/site.css"));
        assert_eq!(relative_key(root, Path::new("/elsewhere/a.txt")), None);
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let listing = scan_directory(Path::new("/definitely/not/here"));
        assert!(listing.files.is_empty());
    }
}
