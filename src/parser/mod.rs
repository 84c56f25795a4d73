//! Parser for pmap documents.
//!
//! Two independent pieces:
//! - [`parse`] turns a whole document into a [`PmapData`](crate::types::PmapData)
//! - [`transform`] rewrites inline `**bold**` and `[text](url)` markup in a
//!   single text fragment
//!
//! # Document Structure
//!
//! ```text
//! ---
//! title: My Doc
//! description: A test
//! ---
//! # Welcome
//!
//! Some **bold** text with a [link](https://example.com).
//!
//! - first
//! - second
//!
//! [image: cat.png | A cat]
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use pmap::parser::{parse, transform};
//!
//! let source = std::fs::read_to_string("notes.pmap")?;
//! let doc = parse(&source);
//!
//! for section in &doc.sections {
//!     if let Some(content) = section.content() {
//!         println!("{}", transform(content));
//!     }
//! }
//! ```

mod document;
mod inline;
pub mod image;
pub mod line;
pub mod metadata;

// Re-export main entry points
pub use document::parse;
pub use image::{parse_image, ImageRef};
pub use inline::transform;
pub use line::{classify, Line};
pub use metadata::{parse_meta_line, MetaField, METADATA_DELIMITER};
