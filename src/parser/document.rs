//! Block-level document parsing.
//!
//! A single pass over the source lines. Consecutive list lines accumulate
//! into one pending list, which is flushed as a `List` section when a
//! blank line, heading, image or paragraph breaks the run, or at the end
//! of input.

use crate::types::{PmapData, Section};

use super::line::{classify, Line};
use super::metadata::{parse_meta_line, MetaField};

/// Parse a pmap document.
///
/// Never fails: malformed lines (such as an unclosed image declaration)
/// are skipped without producing a section.
///
/// A document whose first line is `---` opens a metadata block. If the
/// block is never closed, every remaining line is treated as metadata
/// and no sections are produced for the rest of the document. The
/// `check` lint reports this as `pmap::check::unclosed-metadata`.
///
/// A `---` anywhere else (not line 1, not closing the block) is inert: it
/// produces no section and does not end a pending list.
pub fn parse(content: &str) -> PmapData {
    let mut state = BlockState::default();

    for (index, line) in content.lines().enumerate() {
        state.feed(index, line);
    }

    state.finish()
}

/// Scan state for one `parse` call.
#[derive(Debug, Default)]
struct BlockState {
    doc: PmapData,
    list: Option<Vec<String>>,
    in_metadata: bool,
}

impl BlockState {
    fn feed(&mut self, index: usize, line: &str) {
        match classify(line) {
            Line::Blank => self.flush_list(),
            Line::Delimiter => {
                if self.in_metadata {
                    self.in_metadata = false;
                } else if index == 0 {
                    self.in_metadata = true;
                }
                // Anywhere else a delimiter is inert
            }
            _ if self.in_metadata => self.apply_metadata(line.trim()),
            Line::Heading { level, content } => {
                self.flush_list();
                self.doc.sections.push(Section::heading(level, content));
            }
            Line::Image(image) => {
                self.flush_list();
                if let Some(image) = image {
                    self.doc.sections.push(Section::image(image.url, image.alt));
                }
            }
            Line::ListItem(item) => {
                self.list.get_or_insert_with(Vec::new).push(item.to_string());
            }
            Line::Paragraph(text) => {
                self.flush_list();
                self.doc.sections.push(Section::text(text));
            }
        }
    }

    fn apply_metadata(&mut self, line: &str) {
        match parse_meta_line(line) {
            Some(MetaField::Title(title)) => self.doc.title = Some(title.to_string()),
            Some(MetaField::Description(desc)) => self.doc.description = Some(desc.to_string()),
            None => {}
        }
    }

    fn flush_list(&mut self) {
        if let Some(items) = self.list.take() {
            if !items.is_empty() {
                self.doc.sections.push(Section::List { items });
            }
        }
    }

    fn finish(mut self) -> PmapData {
        self.flush_list();
        self.doc
    }
}
