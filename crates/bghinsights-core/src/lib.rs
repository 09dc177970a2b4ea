//! Decision text analyzer for German federal court (BGH) decisions.
//!
//! Turns the plain text of one decision into an [`ExtractionRecord`]: case
//! number, decision date, guiding-principles marker, motion category, outcome
//! and deciding senate. PDF conversion and persistence live outside this crate.

pub mod analyzer;
pub mod date;
pub mod extract;
pub mod fingerprint;
pub mod outcome;
mod patterns;
pub mod record;
pub mod schema;
pub mod summary;
pub mod text;

pub use analyzer::{Analyzer, AnalyzerOptions};
pub use date::{DateError, DateParsing, DecisionDate};
pub use extract::SenatSpacing;
pub use record::{CourtDecision, ExtractionRecord, GuidingPrinciples, MotionCategory};
pub use schema::decisions;
pub use summary::CorpusSummary;
