//! Tenor isolation and win/loss classification.
//!
//! The tenor is the operative holding of a decision: everything between
//! `beschlossen:` / `für Recht erkannt:` and the start of `Gründe:` or
//! `Tatbestand:`. The outcome is read from keywords inside the tenor only.

use crate::patterns::{LOSING_RE, TENOR_RE, WINNING_RE};
use crate::record::CourtDecision;
use crate::text::collapse_whitespace;

/// Isolate the tenor of a decision, trimmed. `None` when no anchor exists.
pub fn tenor(text: &str) -> Option<&str> {
    TENOR_RE
        .captures(text)
        .and_then(|caps| caps.name("tenor"))
        .map(|m| m.as_str().trim())
}

/// Classify the outcome of a tenor.
///
/// Winning keywords alone mean [`CourtDecision::Won`], losing keywords alone
/// mean [`CourtDecision::Lost`]. Both or neither is left undecided.
pub fn classify(tenor: Option<&str>) -> CourtDecision {
    let Some(tenor) = tenor else {
        return CourtDecision::Unknown;
    };
    let flat = collapse_whitespace(tenor);

    let won = WINNING_RE.is_match(&flat);
    let lost = LOSING_RE.is_match(&flat);

    match (won, lost) {
        (true, false) => CourtDecision::Won,
        (false, true) => CourtDecision::Lost,
        _ => CourtDecision::Unknown,
    }
}
