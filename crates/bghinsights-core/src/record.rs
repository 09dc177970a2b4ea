//! Extraction record types shared between the analyzer, the store and the CLI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured metadata extracted from one BGH decision.
///
/// Field names are the external names consumed downstream; absent values
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Content fingerprint of `extracted_text`, see [`crate::fingerprint::document_id`].
    pub id: u64,
    /// Base name of the source document, if the caller supplied one.
    pub filename: Option<String>,
    pub case_number: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub decision_date: Option<NaiveDate>,
    /// Midnight of `decision_date` read as UTC.
    pub decision_date_unix: Option<i64>,
    pub guiding_principles: GuidingPrinciples,
    pub motion_category: Option<MotionCategory>,
    pub court_decision: CourtDecision,
    pub senat: Option<String>,
    pub extracted_text: String,
}

/// Whether the decision carries the "Nachschlagewerk:" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidingPrinciples {
    #[serde(rename = "Ja")]
    Yes,
    #[serde(rename = "Nein")]
    No,
}

impl GuidingPrinciples {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Ja",
            Self::No => "Nein",
        }
    }

    pub fn from_present(present: bool) -> Self {
        if present { Self::Yes } else { Self::No }
    }
}

/// Procedural remedy sought before the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MotionCategory {
    Revision,
    Rechtsbeschwerde,
    Nichtzulassungsbeschwerde,
}

impl MotionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revision => "Revision",
            Self::Rechtsbeschwerde => "Rechtsbeschwerde",
            Self::Nichtzulassungsbeschwerde => "Nichtzulassungsbeschwerde",
        }
    }

    /// Case-insensitive lookup of a canonical category name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "revision" => Some(Self::Revision),
            "rechtsbeschwerde" => Some(Self::Rechtsbeschwerde),
            "nichtzulassungsbeschwerde" => Some(Self::Nichtzulassungsbeschwerde),
            _ => None,
        }
    }
}

/// Outcome read from the tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CourtDecision {
    #[serde(rename = "Gewonnen")]
    Won,
    #[serde(rename = "Verloren")]
    Lost,
    /// No tenor, no keywords, or keywords of both families.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl CourtDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Won => "Gewonnen",
            Self::Lost => "Verloren",
            Self::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionRecord {
        ExtractionRecord {
            id: 0x0abc_def0_1234_567,
            filename: Some("xii_zb_456-21.txt".into()),
            case_number: Some("XII ZB 456/21".into()),
            decision_date: NaiveDate::from_ymd_opt(2021, 5, 12),
            decision_date_unix: Some(1_620_777_600),
            guiding_principles: GuidingPrinciples::Yes,
            motion_category: Some(MotionCategory::Rechtsbeschwerde),
            court_decision: CourtDecision::Lost,
            senat: Some("XII. Zivilsenat".into()),
            extracted_text: "BESCHLUSS ...".into(),
        }
    }

    #[test]
    fn record_serializes_with_external_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["case_number"], "XII ZB 456/21");
        assert_eq!(json["decision_date"], "2021-05-12");
        assert_eq!(json["decision_date_unix"], 1_620_777_600);
        assert_eq!(json["guiding_principles"], "Ja");
        assert_eq!(json["motion_category"], "Rechtsbeschwerde");
        assert_eq!(json["court_decision"], "Verloren");
        assert_eq!(json["filename"], "xii_zb_456-21.txt");
        assert!(json.get("file_name").is_none());
    }

    #[test]
    fn unknown_decision_serializes_as_empty_string() {
        let mut record = sample();
        record.court_decision = CourtDecision::Unknown;
        record.motion_category = None;
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["court_decision"], "");
        assert!(json["motion_category"].is_null());
    }

    #[test]
    fn record_json_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ExtractionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn motion_category_lookup_ignores_case() {
        assert_eq!(MotionCategory::from_name("REVISION"), Some(MotionCategory::Revision));
        assert_eq!(
            MotionCategory::from_name("Nichtzulassungsbeschwerde"),
            Some(MotionCategory::Nichtzulassungsbeschwerde)
        );
        assert_eq!(MotionCategory::from_name("Berufung"), None);
    }
}
