//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.

mod file_materializer;

// Common test utilities for services
pub mod common {
    use shared::{FileBundle, FileEntry, Language};
    use tempfile::TempDir;

    use crate::services::RealFileMaterializer;

    /// Materializer rooted in a fresh temporary directory
    pub fn temp_materializer() -> (RealFileMaterializer, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let materializer = RealFileMaterializer::with_output_dir(temp_dir.path().to_path_buf());
        (materializer, temp_dir)
    }

    /// Two-file bundle used across tests
    pub fn small_bundle() -> FileBundle {
        let mut bundle = FileBundle::new();
        bundle.insert("a.html", FileEntry::new("x", Language::Html));
        bundle.insert("b.css", FileEntry::new("y", Language::Css));
        bundle
    }
}
