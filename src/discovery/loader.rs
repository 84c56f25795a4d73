//! Document loader - reads and parses discovered files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PmapError, Result};
use crate::parser::parse;
use crate::types::PmapData;

use super::scanner::ScanResult;

/// A document read from disk together with its parse result.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Raw source text, kept for linting.
    pub source: String,
    /// Parsed document.
    pub data: PmapData,
}

/// Read and parse a single document.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let source = fs::read_to_string(path).map_err(|e| PmapError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let data = parse(&source);

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        source,
        data,
    })
}

/// Load every document in a scan result.
///
/// Parsing never fails, so the only errors are unreadable files. All of
/// them are collected and reported together.
pub fn load_documents(scan: &ScanResult) -> Result<Vec<LoadedDocument>> {
    let mut documents = Vec::with_capacity(scan.total());
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.documents {
        match load_document(path) {
            Ok(doc) => documents.push(doc),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(PmapError::Load {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Check that the files exist and are valid UTF-8".to_string()),
        });
    }

    Ok(documents)
}
