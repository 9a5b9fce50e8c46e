//! End-to-end runs of the sample artists pipeline over a small dump.

use std::fs;
use std::path::{Path, PathBuf};

use mdq_check::{ColumnReader, Report};
use mdq_cli::config::load_pipeline;
use mdq_cli::pipeline::{OutputTargets, run_pipeline, run_profile};
use mdq_ingest::{CsvOptions, read_csv_table};
use tempfile::TempDir;

const ARTISTS: &str = "\
id_author;name;gender;birth_date;lat;long;active
1;Mina;female;1940-03-25;45,46;9,19;true
2;Lucio  Battisti;M;1943;42.4;12.9;Sì
3;Franco Battiato;x;1945-03-23;95;15.0;
3;Sfera Ebbasta;M;;45.0;9.1;no
";

fn sample_pipeline() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("pipelines/artists.toml")
}

fn write_dump(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("artists.csv");
    fs::write(&path, ARTISTS).unwrap();
    path
}

fn cells(df: &polars::prelude::DataFrame, column: &str) -> Vec<Option<String>> {
    ColumnReader::new(df)
        .values(column)
        .unwrap()
        .map(|(_, value)| value)
        .collect()
}

#[test]
fn sample_pipeline_loads() {
    let pipeline = load_pipeline(&sample_pipeline()).unwrap();
    assert_eq!(pipeline.input.delimiter, b';');
    assert!(pipeline.profile.enabled);
    let columns: Vec<&str> = pipeline.checks.iter().map(|c| c.column.as_str()).collect();
    assert_eq!(
        columns,
        vec!["id_author", "name", "gender", "birth_date", "lat", "long", "active"]
    );
}

#[test]
fn check_run_reports_and_cleans() {
    let dir = TempDir::new().unwrap();
    let source = write_dump(&dir);
    let pipeline = load_pipeline(&sample_pipeline()).unwrap();

    let run = run_pipeline(&source, &pipeline, &OutputTargets::default()).unwrap();

    assert_eq!(run.rows, 4);
    assert_eq!(run.report.total_failed(), 3);
    assert!(run.written_table.is_none());

    let messages: Vec<String> = run.report.outcomes().iter().map(|o| o.message()).collect();
    insta::assert_snapshot!(messages.join("\n"), @r"
    identifier id_author: 1 of 4 rows failed (0 corrected) (e.g., 3)
    text name: all 4 rows valid (1 corrected)
    category gender: 1 of 4 rows failed (1 corrected) (e.g., x)
    date birth_date: all 4 rows valid (0 corrected)
    coordinate lat: 1 of 4 rows failed (2 corrected) (e.g., 95)
    coordinate long: all 4 rows valid (2 corrected)
    boolean active: all 4 rows valid (2 corrected)
    ");

    assert_eq!(cells(&run.table, "gender")[0].as_deref(), Some("F"));
    assert_eq!(cells(&run.table, "lat")[0].as_deref(), Some("45.46"));
    assert_eq!(cells(&run.table, "active")[1].as_deref(), Some("true"));

    let profile = run.report.profile().unwrap();
    assert_eq!(profile.rows, 4);
    assert_eq!(profile.missing_in("birth_date"), 1);
    assert_eq!(profile.missing_in("active"), 1);
    assert!(profile.duplicate_rows.is_empty());
    assert!(profile.not_validated.is_empty());
}

#[test]
fn check_run_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let source = write_dump(&dir);
    let pipeline = load_pipeline(&sample_pipeline()).unwrap();
    let outputs = OutputTargets {
        table: Some(dir.path().join("out/cleaned.csv")),
        report: Some(dir.path().join("report.json")),
    };

    let run = run_pipeline(&source, &pipeline, &outputs).unwrap();

    let cleaned_path = run.written_table.unwrap();
    let cleaned = read_csv_table(&cleaned_path, &pipeline.input).unwrap();
    assert!(cleaned.equals_missing(&run.table));
    assert_eq!(cells(&cleaned, "name")[1].as_deref(), Some("Lucio Battisti"));

    let json = fs::read_to_string(run.written_report.unwrap()).unwrap();
    let report: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(report, run.report);
}

#[test]
fn cleaned_output_is_stable_on_rerun() {
    let dir = TempDir::new().unwrap();
    let source = write_dump(&dir);
    let pipeline = load_pipeline(&sample_pipeline()).unwrap();
    let cleaned = dir.path().join("cleaned.csv");
    let outputs = OutputTargets {
        table: Some(cleaned.clone()),
        report: None,
    };
    let first = run_pipeline(&source, &pipeline, &outputs).unwrap();

    let second = run_pipeline(&cleaned, &pipeline, &OutputTargets::default()).unwrap();

    assert_eq!(second.report.total_corrected(), 0);
    assert_eq!(second.report.total_failed(), first.report.total_failed());
    assert!(second.table.equals_missing(&first.table));
}

#[test]
fn unknown_column_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("tracks.csv");
    fs::write(&source, "id;title\n1;Azzurro\n").unwrap();
    let pipeline = load_pipeline(&sample_pipeline()).unwrap();
    let output = dir.path().join("cleaned.csv");
    let outputs = OutputTargets {
        table: Some(output.clone()),
        report: None,
    };

    let err = run_pipeline(&source, &pipeline, &outputs).unwrap_err();

    assert!(format!("{err:#}").contains("id_author"));
    assert!(!output.exists());
}

#[test]
fn profile_without_checks() {
    let dir = TempDir::new().unwrap();
    let source = write_dump(&dir);
    let options = CsvOptions::default()
        .with_delimiter(b';')
        .with_infer_types(false);

    let profile = run_profile(&source, &options, &["id_author".to_string(), "name".to_string()])
        .unwrap();

    assert_eq!(profile.rows, 4);
    assert_eq!(profile.not_validated.len(), 7);
    assert_eq!(profile.missing_in("birth_date"), 1);
}
