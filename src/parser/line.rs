//! Line classification.
//!
//! Each trimmed source line falls into exactly one class. The first
//! matching rule wins: blank, metadata delimiter, heading, image, list
//! item, then paragraph as the fallback.

use super::image::{parse_image, ImageRef, IMAGE_PREFIX};
use super::metadata::METADATA_DELIMITER;

/// A classified source line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming.
    Blank,
    /// Exactly `---`.
    Delimiter,
    /// `#..# text`
    Heading { level: usize, content: &'a str },
    /// A line starting with `[image:`. `None` when it is malformed.
    Image(Option<ImageRef<'a>>),
    /// `- item`
    ListItem(&'a str),
    /// Anything else.
    Paragraph(&'a str),
}

/// Classify a single line. Surrounding whitespace is trimmed first.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();

    if line.is_empty() {
        return Line::Blank;
    }

    if line == METADATA_DELIMITER {
        return Line::Delimiter;
    }

    if line.starts_with('#') {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        return Line::Heading {
            level,
            content: line[level..].trim(),
        };
    }

    if line.starts_with(IMAGE_PREFIX) {
        return Line::Image(parse_image(line));
    }

    if let Some(item) = line.strip_prefix('-') {
        return Line::ListItem(item.trim());
    }

    Line::Paragraph(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t "), Line::Blank);
    }

    #[test]
    fn test_classify_delimiter() {
        assert_eq!(classify("---"), Line::Delimiter);
        assert_eq!(classify("  ---  "), Line::Delimiter);
    }

    #[test]
    fn test_classify_heading_levels() {
        assert_eq!(
            classify("## Hello"),
            Line::Heading {
                level: 2,
                content: "Hello"
            }
        );
        assert_eq!(
            classify("#### X"),
            Line::Heading {
                level: 4,
                content: "X"
            }
        );
    }

    #[test]
    fn test_classify_heading_has_no_upper_bound() {
        assert_eq!(
            classify("########## deep"),
            Line::Heading {
                level: 10,
                content: "deep"
            }
        );
    }

    #[test]
    fn test_classify_heading_without_space() {
        assert_eq!(
            classify("#tight"),
            Line::Heading {
                level: 1,
                content: "tight"
            }
        );
    }

    #[test]
    fn test_classify_image() {
        assert_eq!(
            classify("[image: a.png | A cat]"),
            Line::Image(Some(ImageRef {
                url: "a.png",
                alt: "A cat"
            }))
        );
        assert_eq!(classify("[image: broken"), Line::Image(None));
    }

    #[test]
    fn test_classify_list_item() {
        assert_eq!(classify("- milk"), Line::ListItem("milk"));
        assert_eq!(classify("-eggs"), Line::ListItem("eggs"));
        assert_eq!(classify("-"), Line::ListItem(""));
    }

    #[test]
    fn test_classify_double_dash_is_list_item() {
        assert_eq!(classify("-- note"), Line::ListItem("- note"));
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(classify("  Just words.  "), Line::Paragraph("Just words."));
        assert_eq!(classify("[link](http://x)"), Line::Paragraph("[link](http://x)"));
        assert_eq!(classify("title: not metadata"), Line::Paragraph("title: not metadata"));
    }
}
