//! JSON persistence: one aggregate document per batch, optionally one small
//! file per source document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use bghinsights_core::{CourtDecision, ExtractionRecord, GuidingPrinciples, MotionCategory};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::StoreError;

/// Per-document view of a record: every field except `id` and the full text.
#[derive(Debug, Serialize)]
struct DocumentFields<'a> {
    filename: Option<&'a str>,
    case_number: Option<&'a str>,
    decision_date: Option<NaiveDate>,
    decision_date_unix: Option<i64>,
    guiding_principles: GuidingPrinciples,
    motion_category: Option<MotionCategory>,
    court_decision: CourtDecision,
    senat: Option<&'a str>,
}

impl<'a> From<&'a ExtractionRecord> for DocumentFields<'a> {
    fn from(record: &'a ExtractionRecord) -> Self {
        Self {
            filename: record.filename.as_deref(),
            case_number: record.case_number.as_deref(),
            decision_date: record.decision_date,
            decision_date_unix: record.decision_date_unix,
            guiding_principles: record.guiding_principles,
            motion_category: record.motion_category,
            court_decision: record.court_decision,
            senat: record.senat.as_deref(),
        }
    }
}

/// Write all records as one pretty-printed JSON array, in the given order.
///
/// Parent directories are created as needed; an existing file is replaced.
pub fn write_aggregate(path: &Path, records: &[ExtractionRecord]) -> Result<(), StoreError> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(path = %path.display(), count = records.len(), "wrote aggregate json");
    Ok(())
}

/// Read an aggregate document written by [`write_aggregate`].
pub fn read_aggregate(path: &Path) -> Result<Vec<ExtractionRecord>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<ExtractionRecord> = serde_json::from_reader(reader)?;
    info!(path = %path.display(), count = records.len(), "read aggregate json");
    Ok(records)
}

/// Write one record's fields to `<dir>/<stem>.json` and return the path.
///
/// The stem comes from the record's filename; records without one are named
/// after their id in hex.
pub fn write_per_document(dir: &Path, record: &ExtractionRecord) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", document_stem(record)));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, &DocumentFields::from(record))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(path)
}

fn document_stem(record: &ExtractionRecord) -> String {
    record
        .filename
        .as_deref()
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:015x}", record.id))
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(filename: Option<&str>, id: u64) -> ExtractionRecord {
        ExtractionRecord {
            id,
            filename: filename.map(str::to_string),
            case_number: Some("IX ZR 77/22".into()),
            decision_date: NaiveDate::from_ymd_opt(2023, 3, 9),
            decision_date_unix: Some(1_678_320_000),
            guiding_principles: GuidingPrinciples::No,
            motion_category: Some(MotionCategory::Revision),
            court_decision: CourtDecision::Won,
            senat: Some("IX. Zivilsenat".into()),
            extracted_text: "Für Recht erkannt: Das Urteil wird aufgehoben. Gründe: ...".into(),
        }
    }

    #[test]
    fn aggregate_roundtrip_preserves_order_and_umlauts() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("decisions.json");
        let records = vec![record(Some("b.txt"), 2), record(Some("a.txt"), 1)];

        write_aggregate(&path, &records).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Für Recht erkannt"));
        assert!(raw.contains("\"filename\": \"b.txt\""));

        let parsed = read_aggregate(&path).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn read_missing_aggregate_errors() {
        let result = read_aggregate(Path::new("/nonexistent/decisions.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn per_document_file_omits_text_and_id() {
        let tmp = TempDir::new().unwrap();
        let path = write_per_document(tmp.path(), &record(Some("ix_zr_77-22.txt"), 7)).unwrap();
        assert_eq!(path.file_name().unwrap(), "ix_zr_77-22.json");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["case_number"], "IX ZR 77/22");
        assert_eq!(value["court_decision"], "Gewonnen");
        assert_eq!(value["decision_date"], "2023-03-09");
        assert!(value.get("extracted_text").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn per_document_without_filename_uses_id() {
        let tmp = TempDir::new().unwrap();
        let path = write_per_document(tmp.path(), &record(None, 0xabc)).unwrap();
        assert_eq!(path.file_name().unwrap(), "000000000000abc.json");
    }
}
