//! Lint checks for pmap sources.
//!
//! Each check takes the source lines and returns a `ValidationResult`.
//! None of them change how a document parses.

use crate::parser::{classify, parse, parse_meta_line, Line, METADATA_DELIMITER};

use super::warning::{Diagnostic, ValidationResult};

/// Where the leading metadata block sits, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataBlock {
    /// The first line is not `---`.
    Absent,
    /// Closed by the `---` at this 0-indexed line.
    Closed { end: usize },
    /// Opened on the first line and never closed.
    Unclosed,
}

impl MetadataBlock {
    /// 0-indexed line where body content starts.
    pub fn body_start(&self, line_count: usize) -> usize {
        match self {
            MetadataBlock::Absent => 0,
            MetadataBlock::Closed { end } => end + 1,
            MetadataBlock::Unclosed => line_count,
        }
    }
}

/// Locate the leading metadata block.
pub fn find_metadata_block(lines: &[&str]) -> MetadataBlock {
    match lines.first() {
        Some(first) if first.trim() == METADATA_DELIMITER => {}
        _ => return MetadataBlock::Absent,
    }

    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == METADATA_DELIMITER)
        .map(|(end, _)| MetadataBlock::Closed { end })
        .unwrap_or(MetadataBlock::Unclosed)
}

/// Check the metadata block for an unclosed opener and unknown keys.
pub fn check_metadata(lines: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let block = find_metadata_block(lines);
    if block == MetadataBlock::Absent {
        return result;
    }

    if block == MetadataBlock::Unclosed {
        result.push(
            Diagnostic::error(
                "pmap::check::unclosed-metadata",
                "Metadata block is never closed; the rest of the document is ignored",
            )
            .with_help("Add a --- line after the title and description")
            .at_line(1),
        );
    }

    let end = match block {
        MetadataBlock::Closed { end } => end,
        _ => lines.len(),
    };
    for (index, line) in lines.iter().enumerate().take(end).skip(1) {
        let line = line.trim();
        if line.is_empty() || parse_meta_line(line).is_some() {
            continue;
        }
        // Once the block swallows real content, a per-line warning is noise
        if block == MetadataBlock::Unclosed {
            break;
        }
        result.push(
            Diagnostic::warning(
                "pmap::check::unknown-metadata-key",
                format!("Unrecognized metadata line '{}'", line),
            )
            .with_help("Only title: and description: are supported")
            .at_line(index + 1),
        );
    }

    result
}

/// Check body lines for constructs the parser silently drops or accepts.
pub fn check_body(lines: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let start = find_metadata_block(lines).body_start(lines.len());

    for (index, line) in lines.iter().enumerate().skip(start) {
        let line_no = index + 1;
        match classify(line) {
            Line::Delimiter => result.push(
                Diagnostic::warning(
                    "pmap::check::stray-delimiter",
                    "--- outside the leading metadata block is ignored",
                )
                .with_help("Metadata must start on the first line of the document")
                .at_line(line_no),
            ),
            Line::Image(None) => result.push(
                Diagnostic::warning(
                    "pmap::check::malformed-image",
                    format!("Image declaration '{}' is not recognized", line.trim()),
                )
                .with_help("Use [image: url | alt text]")
                .at_line(line_no),
            ),
            Line::Heading { content: "", .. } => result.push(
                Diagnostic::warning("pmap::check::empty-heading", "Heading has no text")
                    .at_line(line_no),
            ),
            Line::ListItem("") => result.push(
                Diagnostic::warning("pmap::check::empty-list-item", "List item has no text")
                    .at_line(line_no),
            ),
            _ => {}
        }
    }

    result
}

/// Check that the document produces at least one section.
pub fn check_empty_document(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if parse(source).is_empty() {
        result.push(
            Diagnostic::warning("pmap::check::empty-document", "Document has no content")
                .with_help("Add a heading, paragraph, list or image"),
        );
    }

    result
}
