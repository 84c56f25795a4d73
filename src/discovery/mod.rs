//! File discovery and document loading for pmap projects.
//!
//! Finds `.pmap` files in a project directory, either by scanning the whole
//! directory or by following the sources listed in a `pmap.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use pmap::discovery::discover;
//!
//! let result = discover("./docs")?;
//! println!("Found {} documents", result.scan.total());
//!
//! for doc in result.load()? {
//!     println!("{}: {} sections", doc.path.display(), doc.data.sections.len());
//! }
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

pub use loader::{load_document, load_documents, LoadedDocument};
pub use manifest::Manifest;
pub use scanner::{is_pmap_file, scan_directory, scan_sources, ScanResult, PMAP_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "pmap.yaml";

/// Result of discovering documents in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no pmap.yaml was found).
    pub manifest: Manifest,

    /// Whether a pmap.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Read and parse every discovered document.
    pub fn load(&self) -> Result<Vec<LoadedDocument>> {
        load_documents(&self.scan)
    }

    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        if self.manifest.output.is_absolute() {
            self.manifest.output.clone()
        } else {
            self.root.join(&self.manifest.output)
        }
    }
}

/// Discover documents in a project directory.
///
/// Looks for a `pmap.yaml` manifest in the root directory. If found, uses
/// the manifest's source paths. Otherwise, scans the entire directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover documents from specific paths (no manifest lookup).
///
/// Directories are scanned recursively; files are taken as given if they
/// have the `.pmap` extension. The root is the deepest directory shared by
/// every input, so documents keep distinct paths relative to it.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();
    let mut bases = Vec::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
            bases.push(path.clone());
        } else if path.is_file() && is_pmap_file(path) {
            scan.merge(ScanResult {
                documents: vec![path.clone()],
            });
            bases.push(path.parent().map(Path::to_path_buf).unwrap_or_default());
        }
    }

    let root = common_ancestor(&bases).unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

/// Longest shared leading run of components. `None` for no input; an
/// empty path when the inputs share nothing (e.g. `x` and `y`).
fn common_ancestor(paths: &[PathBuf]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;
    let mut shared: Vec<Component<'_>> = first.components().collect();

    for path in rest {
        let matching = shared
            .iter()
            .zip(path.components())
            .take_while(|(a, b)| *a == b)
            .count();
        shared.truncate(matching);
    }

    Some(shared.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("intro.pmap"), "# Intro").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
        assert_eq!(result.output_dir(), dir.path().join("dist"));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();

        fs::write(
            dir.path().join("pmap.yaml"),
            "sources:\n  - docs/\noutput: site\nformat: json\n",
        )
        .unwrap();

        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/guide.pmap"), "# Guide").unwrap();
        fs::write(dir.path().join("outside.pmap"), "# Not listed").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.output, PathBuf::from("site"));
        assert_eq!(result.scan.total(), 1);
        assert!(result.scan.documents[0].ends_with("guide.pmap"));
    }

    #[test]
    fn test_discover_with_excludes() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("pmap.yaml"), "excludes:\n  - \"**/backup/*\"\n").unwrap();
        fs::write(dir.path().join("keep.pmap"), "# Keep").unwrap();
        fs::create_dir_all(dir.path().join("backup")).unwrap();
        fs::write(dir.path().join("backup/old.pmap"), "# Old").unwrap();

        let result = discover(dir.path()).unwrap();

        assert_eq!(result.scan.total(), 1);
        assert!(result.scan.documents[0].to_string_lossy().contains("keep"));
    }

    #[test]
    fn test_discover_invalid_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pmap.yaml"), "standalone: maybe").unwrap();

        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn test_discover_and_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.pmap"), "---\ntitle: A\n---\ntext").unwrap();

        let result = discover(dir.path()).unwrap();
        let docs = result.load().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_discover_paths_files() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("one.pmap");
        let other = dir.path().join("notes.txt");
        fs::write(&doc, "# One").unwrap();
        fs::write(&other, "ignored").unwrap();

        let result = discover_paths(&[doc, other]).unwrap();

        assert_eq!(result.scan.total(), 1);
        assert_eq!(result.root, dir.path());
    }

    #[test]
    fn test_discover_paths_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.pmap"), "# One").unwrap();
        fs::write(dir.path().join("two.pmap"), "# Two").unwrap();

        let result = discover_paths(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(result.scan.total(), 2);
        assert_eq!(result.root, dir.path());
    }

    #[test]
    fn test_discover_paths_root_is_shared_ancestor() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x")).unwrap();
        fs::create_dir_all(dir.path().join("y/deep")).unwrap();
        let a = dir.path().join("x/a.pmap");
        let b = dir.path().join("y/deep/a.pmap");
        fs::write(&a, "# from x").unwrap();
        fs::write(&b, "# from y").unwrap();

        let result = discover_paths(&[a, b]).unwrap();

        assert_eq!(result.root, dir.path());
    }

    #[test]
    fn test_common_ancestor() {
        let paths = vec![PathBuf::from("docs/guides"), PathBuf::from("docs/notes/old")];
        assert_eq!(common_ancestor(&paths), Some(PathBuf::from("docs")));

        let disjoint = vec![PathBuf::from("x"), PathBuf::from("y")];
        assert_eq!(common_ancestor(&disjoint), Some(PathBuf::new()));

        assert_eq!(common_ancestor(&[]), None);
    }
}
