//! File system scanner for discovering pmap documents.
//!
//! Recursively scans directories for `.pmap` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extension of pmap documents.
pub const PMAP_EXTENSION: &str = "pmap";

/// Result of scanning for documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered document files, sorted by path.
    pub documents: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Merge another scan result into this one, keeping paths sorted
    /// and unique.
    pub fn merge(&mut self, other: ScanResult) {
        self.documents.extend(other.documents);
        self.documents.sort();
        self.documents.dedup();
    }
}

/// Scan a directory for pmap documents.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_pmap_file(path) {
            result.documents.push(path.to_path_buf());
        }
    }

    result.documents.sort();
    result
}

/// Scan multiple source paths relative to a base directory.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Check whether a path names a pmap document.
pub fn is_pmap_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PMAP_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_pmap_file() {
        assert!(is_pmap_file(Path::new("notes.pmap")));
        assert!(is_pmap_file(Path::new("docs/intro/NOTES.PMAP")));
        assert!(!is_pmap_file(Path::new("readme.md")));
        assert!(!is_pmap_file(Path::new("pmap")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default());

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_with_documents() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.pmap"), "# B").unwrap();
        fs::write(dir.path().join("a.pmap"), "# A").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
        assert!(result.documents[0].ends_with("a.pmap"));
        assert!(result.documents[1].ends_with("b.pmap"));
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("guides/setup")).unwrap();
        fs::write(dir.path().join("guides/setup/install.pmap"), "# Install").unwrap();
        fs::write(dir.path().join("index.pmap"), "# Index").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("keep.pmap"), "# Keep").unwrap();
        fs::write(dir.path().join("drafts/wip.pmap"), "# WIP").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.documents[0].ends_with("keep.pmap"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());

        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_result_merge_dedups() {
        let mut a = ScanResult::new();
        a.documents.push(PathBuf::from("b.pmap"));

        let mut b = ScanResult::new();
        b.documents.push(PathBuf::from("a.pmap"));
        b.documents.push(PathBuf::from("b.pmap"));

        a.merge(b);

        assert_eq!(
            a.documents,
            vec![PathBuf::from("a.pmap"), PathBuf::from("b.pmap")]
        );
    }
}
