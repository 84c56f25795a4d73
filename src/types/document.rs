//! Parsed document model.

use serde::{Deserialize, Serialize};

use super::section::Section;

/// A parsed pmap document: optional front-matter metadata plus the
/// sections in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmapData {
    /// Title from the `title:` metadata line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description from the `description:` metadata line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sections in order of appearance.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PmapData {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over headings as (level, content).
    pub fn headings(&self) -> impl Iterator<Item = (usize, &str)> {
        self.sections.iter().filter_map(|s| match s {
            Section::Heading { content, level } => Some((*level, content.as_str())),
            _ => None,
        })
    }

    /// The title to show for this document.
    ///
    /// Falls back to the first heading when no metadata title is set.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.headings().next().map(|(_, content)| content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = PmapData::new();

        assert!(doc.is_empty());
        assert_eq!(doc.display_title(), None);
    }

    #[test]
    fn test_headings() {
        let doc = PmapData {
            sections: vec![
                Section::heading(1, "One"),
                Section::text("body"),
                Section::heading(2, "Two"),
            ],
            ..Default::default()
        };

        let headings: Vec<_> = doc.headings().collect();
        assert_eq!(headings, vec![(1, "One"), (2, "Two")]);
    }

    #[test]
    fn test_display_title_prefers_metadata() {
        let doc = PmapData {
            title: Some("Meta".to_string()),
            description: None,
            sections: vec![Section::heading(1, "Heading")],
        };

        assert_eq!(doc.display_title(), Some("Meta"));
    }

    #[test]
    fn test_display_title_falls_back_to_heading() {
        let doc = PmapData {
            sections: vec![Section::text("intro"), Section::heading(2, "First")],
            ..Default::default()
        };

        assert_eq!(doc.display_title(), Some("First"));
    }

    #[test]
    fn test_absent_metadata_is_not_serialized() {
        let json = serde_json::to_string(&PmapData::new()).unwrap();

        assert_eq!(json, r#"{"sections":[]}"#);
    }
}
