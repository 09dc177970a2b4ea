//! Field extractors over normalized decision text.
//!
//! Every extractor is first-match-wins in document order: the document header
//! carries the most reliable occurrence of each field.

use serde::{Deserialize, Serialize};

use crate::patterns::{
    CASE_NUMBER_RE, GUIDING_PRINCIPLES_RE, MOTION_CATEGORY_RE, SENAT_RE, WHITESPACE_RUN_RE,
};
use crate::record::{GuidingPrinciples, MotionCategory};

/// How line breaks and repeated spaces inside a matched senate name are cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenatSpacing {
    /// Newlines become spaces, then each double space becomes one space in a
    /// single pass; longer runs are only partly collapsed.
    #[default]
    Compatible,
    /// Every whitespace run becomes one space.
    Collapse,
}

/// First docket-number-like token, e.g. `XII ZB 456/21`.
pub fn case_number(text: &str) -> Option<String> {
    CASE_NUMBER_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn guiding_principles(text: &str) -> GuidingPrinciples {
    GuidingPrinciples::from_present(GUIDING_PRINCIPLES_RE.is_match(text))
}

/// First remedy named after `Auf die` / `Die`.
///
/// The loose forms `Beschwerde ... Nichtzulassung` and `Beschwerde ... Revision`
/// both mean a complaint against non-admission of the appeal.
pub fn motion_category(text: &str) -> Option<MotionCategory> {
    let caps = MOTION_CATEGORY_RE.captures(text)?;
    let remedy = &caps["remedy"];
    if remedy.to_lowercase().starts_with("beschwerde") {
        Some(MotionCategory::Nichtzulassungsbeschwerde)
    } else {
        MotionCategory::from_name(remedy)
    }
}

/// First known panel name, with line breaks and spacing cleaned.
pub fn senat(text: &str, spacing: SenatSpacing) -> Option<String> {
    let found = SENAT_RE.find(text)?.as_str();
    let cleaned = match spacing {
        SenatSpacing::Compatible => found.replace('\n', " ").replace("  ", " "),
        SenatSpacing::Collapse => WHITESPACE_RUN_RE.replace_all(found, " ").into_owned(),
    };
    Some(cleaned)
}
