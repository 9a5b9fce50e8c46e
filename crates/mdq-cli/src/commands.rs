use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use mdq_check::{CategoryPreset, Report, TableProfile};
use mdq_cli::config::load_pipeline;
use mdq_cli::pipeline::{self, CheckRun, OutputTargets};
use mdq_ingest::CsvOptions;

use crate::cli::{CheckArgs, ProfileArgs};
use crate::summary::apply_table_style;

pub fn run_check(args: &CheckArgs) -> Result<CheckRun> {
    let span = info_span!("check", config = %args.config.display());
    let _guard = span.enter();

    let pipeline = load_pipeline(&args.config)?;
    info!(checks = pipeline.checks.len(), "Pipeline loaded");

    let outputs = OutputTargets {
        table: args.output.clone(),
        report: args.report_json.clone(),
    };
    pipeline::run_pipeline(&args.csv, &pipeline, &outputs)
}

/// Exit status for a completed check run.
pub fn check_exit_code(report: &Report, fail_on_findings: bool) -> i32 {
    if fail_on_findings && report.has_findings() {
        1
    } else {
        0
    }
}

pub fn run_profile(args: &ProfileArgs) -> Result<TableProfile> {
    let options = CsvOptions::default()
        .with_delimiter(args.delimiter)
        .with_infer_types(!args.no_infer);
    pipeline::run_profile(&args.csv, &options, &args.ignore)
}

pub fn run_presets() {
    let mut table = Table::new();
    table.set_header(vec!["Preset", "Categories", "Synonyms"]);
    apply_table_style(&mut table);
    for preset in CategoryPreset::ALL {
        table.add_row(vec![
            Cell::new(preset.name()),
            Cell::new(preset.allowed().join(", ")),
            Cell::new(preset.synonyms().len()),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdq_check::{CheckOutcome, FindingReason, RuleKind};

    fn report_with_failures(failed: bool) -> Report {
        let mut outcome = CheckOutcome::new(RuleKind::Category, "gender", 2);
        if failed {
            outcome.flag(1, Some("x".to_string()), FindingReason::Unrecognized);
        }
        let mut report = Report::new();
        report.push(outcome);
        report
    }

    #[test]
    fn test_findings_fail_only_when_requested() {
        let report = report_with_failures(true);
        assert_eq!(check_exit_code(&report, true), 1);
        assert_eq!(check_exit_code(&report, false), 0);
    }

    #[test]
    fn test_clean_run_succeeds() {
        let report = report_with_failures(false);
        assert_eq!(check_exit_code(&report, true), 0);
        assert_eq!(check_exit_code(&Report::new(), true), 0);
    }
}
