//! Vertical card display for decision records.
//!
//! Renders each row of a decision RecordBatch as a grouped, human-readable
//! card with type-aware formatting for the schema's column types.

use arrow::array::*;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

const TEXT_PREVIEW_CHARS: usize = 240;

// ── Schema section groupings ──

const IDENTITY: &[&str] = &["id", "filename", "case_number", "senat"];

const DECISION: &[&str] = &["motion_category", "court_decision", "guiding_principles"];

const DATES: &[&str] = &["decision_date", "decision_date_unix"];

// ── Public API ──

/// Print every row of every batch as a card.
pub fn print_record_cards(batches: &[RecordBatch]) {
    for batch in batches {
        for row in 0..batch.num_rows() {
            print_record_card(batch, row);
        }
    }
}

/// Print a single decision record as a vertical card grouped by schema section.
pub fn print_record_card(batch: &RecordBatch, row: usize) {
    let case_number = get_utf8(batch, "case_number", row).unwrap_or_else(|| "(no case number)".into());
    let filename = get_utf8(batch, "filename", row).unwrap_or_default();

    println!("=== {} ===", case_number);
    if !filename.is_empty() {
        println!("{}", filename);
    }
    println!();

    print_section(batch, row, "Identity", IDENTITY);
    print_section(batch, row, "Decision", DECISION);
    print_section(batch, row, "Dates", DATES);

    if let Some(text) = get_utf8(batch, "extracted_text", row) {
        let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        println!("Text ({} chars)", text.chars().count());
        println!("  {}", preview.split_whitespace().collect::<Vec<_>>().join(" "));
        println!();
    }
}

// ── Section rendering ──

fn print_section(batch: &RecordBatch, row: usize, header: &str, cols: &[&str]) {
    // Skip sections where every column is null for this row.
    let has_data = cols.iter().any(|&col| {
        batch
            .schema()
            .index_of(col)
            .ok()
            .is_some_and(|i| !batch.column(i).is_null(row))
    });
    if !has_data {
        return;
    }

    println!("{header}");
    for &col_name in cols {
        let idx = match batch.schema().index_of(col_name) {
            Ok(i) => i,
            Err(_) => continue,
        };
        let col = batch.column(idx);
        if col.is_null(row) {
            continue;
        }

        match col.data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => {
                let value = col_str(col.as_ref(), row).unwrap_or_default();
                // Undecided outcomes are stored as the empty string.
                let shown = if value.is_empty() { "-" } else { value };
                println!("  {:<22} {}", col_name, shown);
            }
            DataType::UInt64 => {
                if let Some(arr) = col.as_any().downcast_ref::<UInt64Array>() {
                    println!("  {:<22} {}", col_name, arr.value(row));
                }
            }
            DataType::Int64 => {
                if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
                    println!("  {:<22} {}", col_name, arr.value(row));
                }
            }
            DataType::Date32 => {
                let formatted = arrow::util::display::ArrayFormatter::try_new(
                    col.as_ref(),
                    &Default::default(),
                );
                match formatted {
                    Ok(fmt) => println!("  {:<22} {}", col_name, fmt.value(row)),
                    Err(_) => println!("  {:<22} (date)", col_name),
                }
            }
            other => println!("  {:<22} ({other})", col_name),
        }
    }
    println!();
}

// ── Helpers ──

fn get_utf8(batch: &RecordBatch, col_name: &str, row: usize) -> Option<String> {
    let idx = batch.schema().index_of(col_name).ok()?;
    col_str(batch.column(idx).as_ref(), row).map(str::to_string)
}

/// Get a string value from a column that might be Utf8 or LargeUtf8.
fn col_str(col: &dyn Array, i: usize) -> Option<&str> {
    if col.is_null(i) {
        return None;
    }
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        return Some(arr.value(i));
    }
    if let Some(arr) = col.as_any().downcast_ref::<LargeStringArray>() {
        return Some(arr.value(i));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bghinsights_core::Analyzer;

    #[test]
    fn helpers_read_both_string_widths() {
        let record = Analyzer::default()
            .analyze("Der 5. Strafsenat hat beschlossen:\nDie Revision wird verworfen.", Some("5_str.txt"))
            .unwrap();
        let batch = bghinsights_store::records_to_batch(&[record]).unwrap();

        assert_eq!(get_utf8(&batch, "senat", 0).as_deref(), Some("5. Strafsenat"));
        assert_eq!(get_utf8(&batch, "court_decision", 0).as_deref(), Some("Verloren"));
        assert!(get_utf8(&batch, "extracted_text", 0).unwrap().ends_with("verworfen."));
        assert_eq!(get_utf8(&batch, "case_number", 0), None);
        assert_eq!(get_utf8(&batch, "no_such_column", 0), None);
    }

    #[test]
    fn card_prints_without_panicking() {
        let record = Analyzer::default().analyze("Kartellsenat", None).unwrap();
        let batch = bghinsights_store::records_to_batch(&[record]).unwrap();
        print_record_cards(&[batch]);
    }
}
