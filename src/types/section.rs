//! Section type for parsed pmap content blocks.
//!
//! Every block-level construct in a pmap document becomes one `Section`.
//! Each variant carries only the fields meaningful for its kind.
//!
//! # Example
//!
//! ```markdown
//! ## Getting started
//!
//! Install the tool first.
//!
//! - download
//! - unpack
//!
//! [image: setup.png | The setup screen]
//! ```
//!
//! yields a heading, a text section, a list with two items and an image.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A block-level section of a pmap document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    /// A paragraph: `Some plain text`
    Text { content: String },

    /// A heading: `## Title` (level = number of `#`)
    Heading { content: String, level: usize },

    /// A run of consecutive list lines: `- item`
    List { items: Vec<String> },

    /// An image declaration: `[image: url | alt]`
    Image { url: String, alt: String },

    /// A standalone link. Inline `[text](url)` spans are handled by
    /// `parser::transform`, so the block parser never emits this.
    Link { text: String, url: String },
}

/// The kind of a section, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Text,
    Heading,
    List,
    Image,
    Link,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Text => write!(f, "text"),
            SectionKind::Heading => write!(f, "heading"),
            SectionKind::List => write!(f, "list"),
            SectionKind::Image => write!(f, "image"),
            SectionKind::Link => write!(f, "link"),
        }
    }
}

impl Section {
    /// Create a text section.
    pub fn text(content: impl Into<String>) -> Self {
        Section::Text {
            content: content.into(),
        }
    }

    /// Create a heading section.
    pub fn heading(level: usize, content: impl Into<String>) -> Self {
        Section::Heading {
            content: content.into(),
            level,
        }
    }

    /// Create a list section.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an image section.
    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Section::Image {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// Get the kind of this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Text { .. } => SectionKind::Text,
            Section::Heading { .. } => SectionKind::Heading,
            Section::List { .. } => SectionKind::List,
            Section::Image { .. } => SectionKind::Image,
            Section::Link { .. } => SectionKind::Link,
        }
    }

    /// Get the text content for text and heading sections.
    pub fn content(&self) -> Option<&str> {
        match self {
            Section::Text { content } | Section::Heading { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }
}
