//! Storage layer: aggregate and per-document JSON, Parquet export of decision records.

mod error;
pub use error::StoreError;

pub mod columnar;
pub mod json;

pub use columnar::{read_parquet, records_to_batch, write_parquet};
pub use json::{read_aggregate, write_aggregate, write_per_document};
