//! Columnar export of decision records as Arrow RecordBatches and Parquet files.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Int64Array, LargeStringArray, StringArray, UInt64Array};
use arrow::record_batch::RecordBatch;
use bghinsights_core::{ExtractionRecord, decisions};
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::info;

use crate::StoreError;

/// Build one RecordBatch with the decision schema from `records`.
pub fn records_to_batch(records: &[ExtractionRecord]) -> Result<RecordBatch, StoreError> {
    let schema = Arc::new(decisions::decision_schema());

    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from_iter_values(records.iter().map(|r| r.id))),
        Arc::new(StringArray::from_iter(records.iter().map(|r| r.filename.as_deref()))),
        Arc::new(StringArray::from_iter(records.iter().map(|r| r.case_number.as_deref()))),
        Arc::new(Date32Array::from_iter(
            records.iter().map(|r| r.decision_date.map(days_since_epoch)),
        )),
        Arc::new(Int64Array::from_iter(records.iter().map(|r| r.decision_date_unix))),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.guiding_principles.as_str()),
        )),
        Arc::new(StringArray::from_iter(
            records.iter().map(|r| r.motion_category.map(|m| m.as_str())),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.court_decision.as_str()),
        )),
        Arc::new(StringArray::from_iter(records.iter().map(|r| r.senat.as_deref()))),
        Arc::new(LargeStringArray::from_iter_values(
            records.iter().map(|r| r.extracted_text.as_str()),
        )),
    ];

    Ok(RecordBatch::try_new(schema, columns)?)
}

/// Write records to a single Parquet file, replacing any existing file.
pub fn write_parquet(path: &Path, records: &[ExtractionRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let batch = records_to_batch(records)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    info!(path = %path.display(), rows = batch.num_rows(), "wrote parquet");
    Ok(())
}

/// Read a Parquet file into Arrow RecordBatches.
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok(batches?)
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    date.signed_duration_since(epoch).num_days() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use bghinsights_core::{CourtDecision, GuidingPrinciples, MotionCategory};
    use tempfile::TempDir;

    fn records() -> Vec<ExtractionRecord> {
        vec![
            ExtractionRecord {
                id: 11,
                filename: Some("1_str_5-20.txt".into()),
                case_number: Some("StR 5/20".into()),
                decision_date: NaiveDate::from_ymd_opt(2020, 1, 3),
                decision_date_unix: Some(1_578_009_600),
                guiding_principles: GuidingPrinciples::Yes,
                motion_category: Some(MotionCategory::Revision),
                court_decision: CourtDecision::Lost,
                senat: Some("1. Strafsenat".into()),
                extracted_text: "Die Revision wird verworfen.".into(),
            },
            ExtractionRecord {
                id: 12,
                filename: None,
                case_number: None,
                decision_date: None,
                decision_date_unix: None,
                guiding_principles: GuidingPrinciples::No,
                motion_category: None,
                court_decision: CourtDecision::Unknown,
                senat: None,
                extracted_text: "ohne Tenor".into(),
            },
        ]
    }

    #[test]
    fn batch_matches_schema_and_nulls() {
        let batch = records_to_batch(&records()).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 10);

        let dates = batch
            .column_by_name("decision_date")
            .unwrap()
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        assert_eq!(dates.value(0), 18_264);
        assert!(dates.is_null(1));

        let decisions = batch
            .column_by_name("court_decision")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(decisions.value(0), "Verloren");
        assert_eq!(decisions.value(1), "");
    }

    #[test]
    fn empty_batch_is_valid() {
        let batch = records_to_batch(&[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
    }

    #[test]
    fn parquet_roundtrip_row_count() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("decisions.parquet");
        write_parquet(&path, &records()).unwrap();

        let batches = read_parquet(&path).unwrap();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 2);
        assert!(batches[0].schema().field_with_name("senat").is_ok());
    }

    #[test]
    fn missing_parquet_errors() {
        let result = read_parquet(Path::new("/nonexistent/file.parquet"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
