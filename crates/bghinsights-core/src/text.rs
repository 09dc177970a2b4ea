//! Normalization of raw extracted text before analysis.

use crate::patterns::{ARROW_RE, WHITESPACE_RUN_RE};

/// Normalize raw document text.
///
/// Line endings (`\r\n`, lone `\r`) and page breaks (`\f`) become newlines, decorative arrows (`→`, `⇒`, `⇨`) are
/// deleted together with the whitespace around them, and the result is
/// trimmed. Deleting an arrow can join the tokens on either side of it.
///
/// Returns `None` when nothing usable is left.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let text = raw
        .replace("\r\n", "\n")
        .replace(['\r', '\u{c}'], "\n");
    let text = ARROW_RE.replace_all(&text, "");
    let text = text.trim();

    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

/// Collapse every whitespace run (spaces, tabs, newlines) into one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text.trim(), " ").into_owned()
}
