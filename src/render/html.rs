//! HTML output for parsed documents.
//!
//! Text is escaped for use inside a double-quoted attribute first, then run
//! through the inline transform so `**bold**` and `[text](url)` become
//! markup. Quotes are escaped too because link URLs end up in `href`. Headings deeper than six
//! levels render as `<h6>`; the parsed level itself is unchanged.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parser::transform;
use crate::types::{PmapData, Section};

/// Title used for standalone pages when the document has none.
const UNTITLED: &str = "Untitled";

/// Options controlling HTML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the body in a complete HTML page.
    pub standalone: bool,
    /// Apply the inline transform to text, headings and list items.
    pub inline: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            inline: true,
        }
    }
}

/// Renders `PmapData` to HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render a document, as a full page or a body fragment depending on
    /// `HtmlOptions::standalone`.
    pub fn render(&self, doc: &PmapData) -> String {
        let body = self.render_body(doc);

        if self.options.standalone {
            self.wrap_page(doc, &body)
        } else {
            body
        }
    }

    /// Render all sections, one element per line.
    pub fn render_body(&self, doc: &PmapData) -> String {
        let mut out = String::new();
        for section in &doc.sections {
            out.push_str(&self.render_section(section));
            out.push('\n');
        }
        out
    }

    /// Render a single section.
    pub fn render_section(&self, section: &Section) -> String {
        match section {
            Section::Text { content } => format!("<p>{}</p>", self.inline(content)),
            Section::Heading { content, level } => {
                let level = (*level).clamp(1, 6);
                format!("<h{level}>{}</h{level}>", self.inline(content))
            }
            Section::List { items } => {
                let mut out = String::from("<ul>\n");
                for item in items {
                    out.push_str(&format!("  <li>{}</li>\n", self.inline(item)));
                }
                out.push_str("</ul>");
                out
            }
            Section::Image { url, alt } => format!(
                r#"<figure><img src="{}" alt="{}"></figure>"#,
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(alt)
            ),
            Section::Link { text, url } => format!(
                r#"<p><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></p>"#,
                encode_double_quoted_attribute(url),
                encode_text(text)
            ),
        }
    }

    fn inline(&self, text: &str) -> String {
        let escaped = encode_double_quoted_attribute(text);
        if self.options.inline {
            transform(&escaped)
        } else {
            escaped.into_owned()
        }
    }

    fn wrap_page(&self, doc: &PmapData, body: &str) -> String {
        let title = doc.display_title().unwrap_or(UNTITLED);

        let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", encode_text(title)));
        if let Some(description) = &doc.description {
            page.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                encode_double_quoted_attribute(description)
            ));
        }
        page.push_str("</head>\n<body>\n");
        page.push_str(body);
        page.push_str("</body>\n</html>\n");
        page
    }
}

/// Render a document with default options (standalone page, inline markup).
pub fn render_html(doc: &PmapData) -> String {
    HtmlRenderer::default().render(doc)
}
