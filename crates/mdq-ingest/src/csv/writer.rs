//! CSV output for cleaned tables.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Writes `df` as CSV with a header row, creating parent directories.
pub fn write_csv_table(path: &Path, df: &mut DataFrame, delimiter: u8) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(delimiter)
        .finish(df)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Wrote CSV table"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{CsvOptions, read_csv_table};

    #[test]
    fn test_written_table_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("artists_clean.csv");

        let mut df = df! {
            "id_author" => ["1", "2"],
            "gender" => [Some("M"), None],
        }
        .unwrap();
        write_csv_table(&path, &mut df, b';').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id_author;gender\n"));

        let options = CsvOptions::default()
            .with_delimiter(b';')
            .with_infer_types(false);
        let back = read_csv_table(&path, &options).unwrap();
        assert_eq!(back.height(), 2);
        assert_eq!(back.get_column_names_str(), vec!["id_author", "gender"]);
    }
}
