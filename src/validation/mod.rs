//! Lint system for pmap sources.
//!
//! The parser accepts any input and silently skips what it cannot use.
//! These checks report those cases (unclosed metadata, malformed images,
//! stray delimiters) for `pmap check` and `pmap build --check`.

mod checks;
mod warning;

pub use checks::{find_metadata_block, MetadataBlock};
pub use warning::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::output::{display_path, Printer};

/// Run all lint checks against a document source.
pub fn check_source(source: &str) -> ValidationResult {
    let lines: Vec<&str> = source.lines().collect();
    let mut result = ValidationResult::new();

    result.merge(checks::check_metadata(&lines));
    result.merge(checks::check_body(&lines));
    result.merge(checks::check_empty_document(source));

    result.sort_by_line();
    result
}

/// Print diagnostics for one file to stderr.
pub fn print_diagnostics(printer: &Printer, path: &Path, result: &ValidationResult) {
    let file = display_path(path);

    for diagnostic in result.iter() {
        printer.diagnostic(&file, diagnostic);
    }
}
