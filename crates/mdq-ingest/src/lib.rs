//! Table ingestion for mdq.
//!
//! Loads the artists/tracks dumps (CSV, caller-chosen delimiter) into Polars
//! DataFrames and writes cleaned tables back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mdq_ingest::{CsvOptions, read_csv_table};
//!
//! let options = CsvOptions::default().with_delimiter(b';');
//! let df = read_csv_table(Path::new("datasets/artists.csv"), &options)?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV ===
pub use csv::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_dataframe_shape, validate_encoding, write_csv_table,
};
