//! pmap - plain-text document parser
//!
//! A library for turning documents in the pmap markup dialect into a
//! structured model, and for rendering that model as HTML or JSON.
//!
//! The core is two pure functions: [`parse`] for block structure and
//! [`transform`] for inline `**bold**` and `[text](url)` markup.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, LoadedDocument, Manifest, ScanResult};
pub use error::{PmapError, Result};
pub use parser::{parse, transform};
pub use render::{render_html, render_json, write_document, HtmlOptions, HtmlRenderer, OutputFormat};
pub use types::{PmapData, Section, SectionKind};
pub use validation::{check_source, Diagnostic, Severity, ValidationResult};
