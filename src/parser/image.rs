//! Image declaration parsing: `[image: url | alt]`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix that marks a line as an image declaration.
pub const IMAGE_PREFIX: &str = "[image:";

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[image:([^|\]]*)(?:\|([^\]]*))?\]").unwrap());

/// An image reference borrowed from a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub url: &'a str,
    pub alt: &'a str,
}

/// Parse an image declaration.
///
/// The alt text and its `|` separator are optional; alt defaults to an
/// empty string. Returns `None` when the line does not have the expected
/// shape or the URL is empty.
pub fn parse_image(line: &str) -> Option<ImageRef<'_>> {
    let caps = IMAGE_PATTERN.captures(line)?;

    let url = caps.get(1).map_or("", |m| m.as_str().trim());
    if url.is_empty() {
        return None;
    }

    let alt = caps.get(2).map_or("", |m| m.as_str().trim());

    Some(ImageRef { url, alt })
}
