/// Arrow schema definitions for extracted decision records.
pub mod decisions {
    use arrow::datatypes::{DataType, Field, Schema};

    /// Schema of the decision table, one row per [`ExtractionRecord`](crate::ExtractionRecord).
    ///
    /// Column names match the JSON field names.
    pub fn decision_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::UInt64, false),
            Field::new("filename", DataType::Utf8, true),
            Field::new("case_number", DataType::Utf8, true),
            Field::new("decision_date", DataType::Date32, true),
            Field::new("decision_date_unix", DataType::Int64, true),
            Field::new("guiding_principles", DataType::Utf8, false),
            Field::new("motion_category", DataType::Utf8, true),
            Field::new("court_decision", DataType::Utf8, false),
            Field::new("senat", DataType::Utf8, true),
            Field::new("extracted_text", DataType::LargeUtf8, false),
        ])
    }
}
