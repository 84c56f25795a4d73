//! Front-matter metadata lines.
//!
//! The metadata block sits between `---` markers on the very first lines
//! of a document. Only `title:` and `description:` are recognized; the
//! value is the trimmed remainder of the line.

/// Line that opens and closes the metadata block.
pub const METADATA_DELIMITER: &str = "---";

const TITLE_PREFIX: &str = "title:";
const DESCRIPTION_PREFIX: &str = "description:";

/// A recognized metadata assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField<'a> {
    Title(&'a str),
    Description(&'a str),
}

/// Parse a trimmed line from inside the metadata block.
///
/// Returns `None` for anything other than a `title:` or `description:` line.
pub fn parse_meta_line(line: &str) -> Option<MetaField<'_>> {
    if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
        Some(MetaField::Title(rest.trim()))
    } else if let Some(rest) = line.strip_prefix(DESCRIPTION_PREFIX) {
        Some(MetaField::Description(rest.trim()))
    } else {
        None
    }
}
