//! Corpus-level statistics over extracted records.

use std::collections::BTreeMap;

use crate::record::{CourtDecision, ExtractionRecord, GuidingPrinciples, MotionCategory};

/// Summary statistics for a set of extraction records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSummary {
    pub total: usize,
    pub with_filename: usize,
    pub with_case_number: usize,
    pub with_decision_date: usize,
    pub with_motion_category: usize,
    pub with_senat: usize,
    pub with_guiding_principles: usize,
    pub won: usize,
    pub lost: usize,
    pub undecided: usize,
    /// Records per motion category.
    pub motion_categories: BTreeMap<MotionCategory, usize>,
    /// Records per senate, keyed by normalized name.
    pub senates: BTreeMap<String, usize>,
}

impl CorpusSummary {
    pub fn from_records(records: &[ExtractionRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            if record.filename.is_some() {
                summary.with_filename += 1;
            }
            if record.case_number.is_some() {
                summary.with_case_number += 1;
            }
            if record.decision_date.is_some() {
                summary.with_decision_date += 1;
            }
            if record.guiding_principles == GuidingPrinciples::Yes {
                summary.with_guiding_principles += 1;
            }
            if let Some(category) = record.motion_category {
                summary.with_motion_category += 1;
                *summary.motion_categories.entry(category).or_default() += 1;
            }
            if let Some(senat) = &record.senat {
                summary.with_senat += 1;
                *summary.senates.entry(senat.clone()).or_default() += 1;
            }
            match record.court_decision {
                CourtDecision::Won => summary.won += 1,
                CourtDecision::Lost => summary.lost += 1,
                CourtDecision::Unknown => summary.undecided += 1,
            }
        }

        summary
    }

    /// Share of decided records that were won, if any record was decided.
    pub fn win_rate(&self) -> Option<f64> {
        let decided = self.won + self.lost;
        (decided > 0).then(|| self.won as f64 / decided as f64)
    }
}
