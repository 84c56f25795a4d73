//! Rendering module for pmap.
//!
//! Turns parsed documents into HTML pages or JSON, and writes them to disk.

mod html;
mod json;

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PmapError, Result};
use crate::types::PmapData;

pub use html::{render_html, HtmlOptions, HtmlRenderer};
pub use json::render_json;

/// Output format for rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// File extension for this format (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render a document in the given format.
pub fn render(doc: &PmapData, format: OutputFormat, options: HtmlOptions) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(HtmlRenderer::new(options).render(doc)),
        OutputFormat::Json => render_json(doc),
    }
}

/// Render a document and write it to a file.
pub fn write_document(
    doc: &PmapData,
    path: &Path,
    format: OutputFormat,
    options: HtmlOptions,
) -> Result<()> {
    let rendered = render(doc, format, options)?;

    fs::write(path, rendered).map_err(|e| PmapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write {}: {}", format, e),
    })?;

    Ok(())
}
