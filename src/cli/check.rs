//! Check command implementation.
//!
//! Lints documents and reports diagnostics without writing any output.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, DiscoveryResult, LoadedDocument};
use crate::error::{PmapError, Result};
use crate::output::{plural, Printer};
use crate::validation::{check_source, print_diagnostics};

/// Lint .pmap documents without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: discover from pmap.yaml)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Totals across all checked documents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckSummary {
    /// Whether the check should fail.
    pub fn failed(&self, strict: bool) -> bool {
        self.errors > 0 || (strict && self.warnings > 0)
    }
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve_discovery(&args.paths)?;
    let documents = discovery.load()?;

    let summary = check_documents(&documents, printer);

    let totals = format!(
        "{}, {}",
        plural(summary.errors, "error", "errors"),
        plural(summary.warnings, "warning", "warnings")
    );

    if summary.failed(args.strict) {
        return Err(PmapError::Check {
            message: format!("{} ({})", plural(summary.files, "file", "files"), totals),
            help: if summary.errors == 0 {
                Some("Warnings fail the check because --strict is set".to_string())
            } else {
                None
            },
        });
    }

    printer.status(
        "Checked",
        &format!("{} ({})", plural(summary.files, "file", "files"), totals),
    );

    Ok(())
}

/// Discover from the current directory, or from explicit paths.
pub(crate) fn resolve_discovery(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        discover(".")
    } else {
        discover_paths(paths)
    }
}

/// Lint loaded documents, printing diagnostics as they are found.
pub fn check_documents(documents: &[LoadedDocument], printer: &Printer) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for doc in documents {
        let result = check_source(&doc.source);

        summary.files += 1;
        summary.errors += result.error_count();
        summary.warnings += result.warning_count();

        if !result.is_ok() {
            print_diagnostics(printer, &doc.path, &result);
        }
    }

    summary
}
