//! CSV file reading with a caller-chosen delimiter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// How to parse a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator; the artists dump uses `;`.
    #[serde(with = "delimiter_char")]
    pub delimiter: u8,
    /// Let Polars infer column types. When false every column is read as text.
    pub infer_types: bool,
    /// Rows scanned for type inference.
    pub infer_schema_length: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
            infer_schema_length: 100,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }
}

/// Serializes the delimiter byte as a one-character string (`";"`).
mod delimiter_char {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&char::from(*value).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = if raw == "\\t" { "\t".to_string() } else { raw };
        match raw.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(D::Error::custom(format!(
                "delimiter must be a single ASCII character, got {raw:?}"
            ))),
        }
    }
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Rejects tables without rows and blank column names.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a CSV dump into a Polars DataFrame.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let infer_length = if options.infer_types {
        options.infer_schema_length
    } else {
        0
    };
    let parse_options = CsvParseOptions::default().with_separator(options.delimiter);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(infer_length))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV table"
    );

    Ok(df)
}
