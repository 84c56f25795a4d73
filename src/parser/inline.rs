//! Inline markup transform.
//!
//! Replaces `**bold**` spans with `<strong>` and `[text](url)` spans with
//! an anchor that opens in a new tab. Everything else passes through.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply inline markup to a text fragment.
///
/// Bold is replaced first, then links. Matches are non-overlapping and
/// scanned left to right; unmatched markers are left as they are.
pub fn transform(text: &str) -> String {
    let bolded = BOLD.replace_all(text, "<strong>${1}</strong>");
    LINK.replace_all(
        &bolded,
        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    )
    .into_owned()
}
