//! Build command implementation.
//!
//! Renders discovered documents to HTML or JSON files.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use clap::Args;

use crate::discovery::LoadedDocument;
use crate::error::{PmapError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_document, OutputFormat};

use super::check::{check_documents, resolve_discovery};

/// Render .pmap documents to HTML or JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Files or directories to build (default: discover from pmap.yaml)
    pub paths: Vec<PathBuf>,

    /// Output directory (overrides pmap.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format (overrides pmap.yaml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit body fragments instead of complete HTML pages
    #[arg(long)]
    pub fragment: bool,

    /// Leave **bold** and [text](url) markup untouched
    #[arg(long)]
    pub no_inline: bool,

    /// Lint documents first and stop if any errors are found
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve_discovery(&args.paths)?;

    if discovery.scan.is_empty() {
        printer.warning("Warning", "no .pmap files found");
        return Ok(());
    }

    let documents = discovery.load()?;

    if args.check {
        let summary = check_documents(&documents, printer);
        if summary.failed(false) {
            return Err(PmapError::Check {
                message: plural(summary.errors, "error", "errors"),
                help: Some("Fix the errors above or build without --check".to_string()),
            });
        }
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| discovery.output_dir());
    let format = args.format.unwrap_or(discovery.manifest.format);

    let mut options = discovery.manifest.html_options();
    if args.fragment {
        options.standalone = false;
    }
    if args.no_inline {
        options.inline = false;
    }

    let targets = output_paths(&output, &discovery.root, &documents, format)?;

    for (doc, out_path) in documents.iter().zip(&targets) {
        if let Some(parent) = out_path.parent() {
            create_dir(parent)?;
        }

        write_document(&doc.data, out_path, format, options)?;

        printer.status(
            "Rendering",
            &format!(
                "{} {}",
                display_path(&doc.path),
                printer.dim(&format!(
                    "({})",
                    plural(doc.data.sections.len(), "section", "sections")
                ))
            ),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "{} into {}",
            plural(documents.len(), "document", "documents"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(())
}

/// Output path for every document, in order.
///
/// Fails before anything is written if two documents would land on the
/// same file.
fn output_paths(
    output: &Path,
    root: &Path,
    documents: &[LoadedDocument],
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(documents.len());

    for doc in documents {
        let target = output_path(output, root, &doc.path, format);

        if let Some(previous) = claimed.insert(target.clone(), doc.path.as_path()) {
            return Err(PmapError::Io {
                path: target,
                message: format!(
                    "{} and {} both render to this file",
                    display_path(previous),
                    display_path(&doc.path)
                ),
            });
        }
        targets.push(target);
    }

    Ok(targets)
}

/// Output path for a document: its location relative to the project root,
/// under the output directory, with the format's extension. Sources that
/// do not sit below the root use their file name alone.
fn output_path(output: &Path, root: &Path, source: &Path, format: OutputFormat) -> PathBuf {
    let relative = source
        .strip_prefix(root)
        .ok()
        .filter(|rel| rel.components().all(|c| matches!(c, Component::Normal(_))))
        .map(Path::to_path_buf)
        .or_else(|| source.file_name().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("document"));

    output.join(relative).with_extension(format.extension())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| PmapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
