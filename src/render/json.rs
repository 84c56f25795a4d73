//! JSON output for parsed documents.

use crate::error::{PmapError, Result};
use crate::types::PmapData;

/// Serialize a document as pretty-printed JSON.
///
/// Sections are tagged with `"type"`; absent metadata fields are omitted.
pub fn render_json(doc: &PmapData) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| PmapError::Render {
        message: format!("Failed to serialize document: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    #[test]
    fn test_render_json_shape() {
        let doc = PmapData {
            title: Some("T".to_string()),
            description: None,
            sections: vec![Section::list(["a", "b"])],
        };

        let json = render_json(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "T");
        assert!(value.get("description").is_none());
        assert_eq!(value["sections"][0]["type"], "list");
        assert_eq!(value["sections"][0]["items"][1], "b");
    }

    #[test]
    fn test_render_json_round_trips() {
        let doc = PmapData {
            title: None,
            description: Some("d".to_string()),
            sections: vec![Section::heading(2, "H"), Section::image("a.png", "")],
        };

        let json = render_json(&doc).unwrap();
        let back: PmapData = serde_json::from_str(&json).unwrap();

        assert_eq!(back, doc);
    }
}
