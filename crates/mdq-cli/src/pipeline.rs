//! Check pipeline with explicit stages.
//!
//! 1. **Ingest**: read the CSV dump with the configured dialect
//! 2. **Check**: run the configured checkers over the table
//! 3. **Output**: write the cleaned table and the JSON report

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, trace};

use mdq_check::{Report, TableProfile, profile_table};
use mdq_ingest::{CsvOptions, read_csv_table, write_csv_table};

use crate::config::PipelineFile;
use crate::logging::redact_value;

/// Where the output stage writes.
#[derive(Debug, Clone, Default)]
pub struct OutputTargets {
    /// Cleaned CSV path.
    pub table: Option<PathBuf>,
    /// JSON report path.
    pub report: Option<PathBuf>,
}

/// Result of a completed check run.
#[derive(Debug)]
pub struct CheckRun {
    pub source: PathBuf,
    pub rows: usize,
    /// The table after every checker ran.
    pub table: DataFrame,
    pub report: Report,
    pub written_table: Option<PathBuf>,
    pub written_report: Option<PathBuf>,
}

/// Ingest, check, and write outputs.
pub fn run_pipeline(
    source: &Path,
    pipeline: &PipelineFile,
    outputs: &OutputTargets,
) -> Result<CheckRun> {
    let span = info_span!("pipeline", source = %source.display());
    let _guard = span.enter();

    let mut table = ingest(source, &pipeline.input)?;
    let rows = table.height();

    let mut quality = pipeline.data_quality();
    let report = quality
        .run(&mut table)
        .with_context(|| format!("check {}", source.display()))?;
    trace_findings(&report);

    let written_table = match &outputs.table {
        Some(path) => {
            write_csv_table(path, &mut table, pipeline.input.delimiter)
                .with_context(|| format!("write cleaned table {}", path.display()))?;
            info!(path = %path.display(), "Cleaned table written");
            Some(path.clone())
        }
        None => None,
    };
    let written_report = match &outputs.report {
        Some(path) => {
            write_report_json(path, &report)?;
            info!(path = %path.display(), "Report written");
            Some(path.clone())
        }
        None => None,
    };

    Ok(CheckRun {
        source: source.to_path_buf(),
        rows,
        table,
        report,
        written_table,
        written_report,
    })
}

/// Read the table and profile it without running any checker.
pub fn run_profile(source: &Path, options: &CsvOptions, ignore: &[String]) -> Result<TableProfile> {
    let span = info_span!("profile", source = %source.display());
    let _guard = span.enter();

    let table = ingest(source, options)?;
    let no_checks: &[String] = &[];
    Ok(profile_table(&table, no_checks, ignore))
}

fn ingest(source: &Path, options: &CsvOptions) -> Result<DataFrame> {
    let table = read_csv_table(source, options)
        .with_context(|| format!("read {}", source.display()))?;
    info!(
        rows = table.height(),
        columns = table.width(),
        "Table loaded"
    );
    Ok(table)
}

/// Serialize the report as pretty JSON.
pub fn write_report_json(path: &Path, report: &Report) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("serialize report {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush report {}", path.display()))?;
    Ok(())
}

fn trace_findings(report: &Report) {
    for outcome in report {
        for finding in &outcome.findings {
            trace!(
                check = %outcome.kind,
                column = %outcome.column,
                row = finding.row,
                value = redact_value(finding.value.as_deref().unwrap_or("")),
                reason = %finding.reason,
                "Finding"
            );
        }
    }
}
