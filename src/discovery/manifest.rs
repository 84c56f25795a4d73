//! Project manifest (pmap.yaml) parsing.
//!
//! The manifest defines project configuration: where to look for `.pmap`
//! files, where to write output, and default rendering options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PmapError, Result};
use crate::render::{HtmlOptions, OutputFormat};

/// Project manifest loaded from pmap.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for documents.
    /// Defaults to the project root if empty.
    pub sources: Vec<String>,

    /// Output directory for rendered documents.
    pub output: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// Render complete HTML pages rather than body fragments.
    pub standalone: bool,

    /// Apply inline `**bold**` and `[text](url)` markup.
    pub inline: bool,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            format: OutputFormat::default(),
            standalone: true,
            inline: true,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pmap.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PmapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid manifest with all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PmapError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pmap.yaml syntax".to_string()),
        })
    }

    /// HTML rendering options from this manifest.
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            standalone: self.standalone,
            inline: self.inline,
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to the project root.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}
