//! The decision text analyzer: one document's text in, one record out.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::date::{DateParsing, extract_decision_date};
use crate::extract::{self, SenatSpacing};
use crate::fingerprint::{base_name, document_id};
use crate::outcome;
use crate::record::ExtractionRecord;
use crate::text;

/// Tunables for the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    pub date_parsing: DateParsing,
    pub senat_spacing: SenatSpacing,
}

/// Stateless analyzer for BGH decision texts.
///
/// Holds only options; all patterns are process-wide statics, so one analyzer
/// can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// Extract a record from one document.
    ///
    /// The text is normalized first (see [`text::normalize`]); `None` means the
    /// document has no usable text and should be skipped. Fields that cannot
    /// be found are left absent and never abort the rest of the extraction.
    pub fn analyze(&self, raw_text: &str, filename: Option<&str>) -> Option<ExtractionRecord> {
        let filename = filename.and_then(base_name);

        let Some(text) = text::normalize(raw_text) else {
            info!(filename = filename.as_deref().unwrap_or("-"), "no usable text, skipping");
            return None;
        };

        let decision_date = match extract_decision_date(&text, self.options.date_parsing) {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    filename = filename.as_deref().unwrap_or("-"),
                    error = %e,
                    "decision date matched but not parsed"
                );
                None
            }
        };

        let tenor = outcome::tenor(&text);
        let has_tenor = tenor.is_some();
        let court_decision = outcome::classify(tenor);

        let record = ExtractionRecord {
            id: document_id(&text),
            filename,
            case_number: extract::case_number(&text),
            decision_date: decision_date.map(|d| d.date),
            decision_date_unix: decision_date.map(|d| d.unix),
            guiding_principles: extract::guiding_principles(&text),
            motion_category: extract::motion_category(&text),
            court_decision,
            senat: extract::senat(&text, self.options.senat_spacing),
            extracted_text: text,
        };

        debug!(
            id = record.id,
            case_number = record.case_number.as_deref().unwrap_or("-"),
            court_decision = record.court_decision.as_str(),
            has_tenor,
            "analyzed decision"
        );
        Some(record)
    }
}
