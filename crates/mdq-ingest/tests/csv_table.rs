use std::fs;
use std::path::PathBuf;

use polars::prelude::DataType;

use mdq_ingest::{CsvOptions, IngestError, read_csv_table};

const ARTISTS: &str = "\
id_author;name;gender;birth_date;latitude
1;Mina;female;1940-03-25;45,46
2;Lucio Battisti;M;1943/03/05;42.40
3;Franco Battiato;maschio;;37.68
";

fn temp_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_semicolon_dump_with_inferred_types() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(&dir, "artists.csv", ARTISTS);

    let options = CsvOptions::default().with_delimiter(b';');
    let df = read_csv_table(&path, &options).expect("read csv");

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 5);
    assert_eq!(
        df.column("id_author").expect("id column").dtype(),
        &DataType::Int64
    );
    // Decimal commas keep the column textual.
    assert_eq!(
        df.column("latitude").expect("latitude column").dtype(),
        &DataType::String
    );
}

#[test]
fn reads_everything_as_text_when_inference_is_off() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(&dir, "artists.csv", ARTISTS);

    let options = CsvOptions::default()
        .with_delimiter(b';')
        .with_infer_types(false);
    let df = read_csv_table(&path, &options).expect("read csv");

    for column in df.get_columns() {
        assert_eq!(column.dtype(), &DataType::String, "{}", column.name());
    }
    assert_eq!(
        df.column("birth_date").expect("birth_date").null_count(),
        1
    );
}

#[test]
fn header_only_file_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(&dir, "empty.csv", "id_author;name\n");

    let options = CsvOptions::default().with_delimiter(b';');
    let err = read_csv_table(&path, &options).expect_err("empty table");
    assert!(matches!(err, IngestError::EmptyDataFrame { .. }));
}

#[test]
fn missing_file_is_reported() {
    let err = read_csv_table(
        std::path::Path::new("/nonexistent/tracks.csv"),
        &CsvOptions::default(),
    )
    .expect_err("missing file");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
