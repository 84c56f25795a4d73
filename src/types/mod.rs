//! Core domain types for pmap.
//!
//! - `PmapData` - a parsed document (metadata plus sections)
//! - `Section` - one block-level construct (text, heading, list, image, link)

mod document;
mod section;

pub use document::PmapData;
pub use section::{Section, SectionKind};
