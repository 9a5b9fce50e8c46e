//! Column checker functions.
//!
//! Each submodule implements one [`RuleKind`]: it reads the target column,
//! normalizes recoverable values to canonical text, and records a finding for
//! every row it cannot accept. Rows are never reordered or dropped.
//!
//! A flagged value keeps its original text unless the rule's policy says
//! otherwise, so running a checker over an already-cleaned column changes
//! nothing and reports the same findings.

mod boolean;
mod category;
mod coordinate;
mod date;
mod identifier;
mod range;
mod text;

use mdq_common::is_missing;
use mdq_model::{CheckConfig, CheckOutcome, FindingReason, Rule, RuleKind};
use polars::prelude::DataFrame;

use crate::column_reader::{ColumnReader, ColumnRewrite};
use crate::error::Result;

pub use boolean::check_boolean;
pub use category::check_category;
pub use coordinate::check_coordinate;
pub use date::{DateValue, check_date, parse_date_value};
pub use identifier::check_identifier;
pub use range::check_numeric_range;
pub use text::check_text;

/// Run the checker described by `config` against `df`.
pub fn run_check(df: &mut DataFrame, config: &CheckConfig) -> Result<CheckOutcome> {
    let column = config.column.as_str();
    match &config.rule {
        Rule::Identifier(params) => check_identifier(df, column, params),
        Rule::Date(params) => check_date(df, column, params),
        Rule::Category(params) => check_category(df, column, params),
        Rule::Coordinate(params) => check_coordinate(df, column, params),
        Rule::Boolean(params) => check_boolean(df, column, params),
        Rule::Text(params) => check_text(df, column, params),
        Rule::NumericRange(params) => check_numeric_range(df, column, params),
    }
}

/// Validate `config` against `df` without touching any data.
pub fn validate_check(df: &DataFrame, config: &CheckConfig) -> Result<()> {
    ColumnReader::new(df).column(&config.column)?;
    config.rule.validate()?;
    Ok(())
}

/// What a rule decided about one non-missing cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Verdict {
    /// Acceptable; the canonical text replaces the original if they differ.
    Valid(String),
    /// Flagged; the original text stays.
    Invalid(FindingReason),
    /// Flagged and replaced by the given value (category policies).
    Replaced(Option<String>, FindingReason),
}

/// Shared row loop: missing detection, correction bookkeeping, write-back.
///
/// `judge` sees each non-missing cell's text with its row index.
pub(crate) fn check_cells<F>(
    df: &mut DataFrame,
    column: &str,
    kind: RuleKind,
    allow_missing: bool,
    mut judge: F,
) -> Result<CheckOutcome>
where
    F: FnMut(usize, &str) -> Verdict,
{
    let reader = ColumnReader::new(df);
    let mut outcome = CheckOutcome::new(kind, column, reader.height() as u64);
    let mut rewrite = ColumnRewrite::from_reader(&reader, column)?;

    for (idx, value) in reader.values(column)? {
        let Some(text) = value.as_deref().filter(|text| !is_missing(text)) else {
            if !allow_missing {
                outcome.flag(idx, value, FindingReason::Missing);
            }
            continue;
        };

        match judge(idx, text) {
            Verdict::Valid(canonical) => {
                if canonical != text {
                    rewrite.replace(idx, Some(canonical));
                    outcome.record_correction();
                }
            }
            Verdict::Invalid(reason) => outcome.flag(idx, value, reason),
            Verdict::Replaced(replacement, reason) => {
                rewrite.replace(idx, replacement);
                outcome.flag(idx, value, reason);
            }
        }
    }

    rewrite.apply(df)?;

    tracing::debug!(
        check = %kind,
        column,
        inspected = outcome.inspected,
        corrected = outcome.corrected,
        failed = outcome.failed,
        "Checker finished"
    );

    Ok(outcome)
}


#[cfg(test)]
mod tests {
    use super::test_support::text_df;
    use super::*;
    use mdq_model::{CategoryParams, CoordinateParams, RangeParams};

    #[test]
    fn test_run_check_dispatches_on_rule() {
        let mut df = text_df("gender", &[Some("female")]);
        let outcome = run_check(&mut df, &CheckConfig::new("gender", CategoryParams::gender()))
            .unwrap();
        assert_eq!(outcome.kind, RuleKind::Category);
        assert_eq!(outcome.corrected, 1);
    }

    #[test]
    fn test_validate_check_reports_missing_column() {
        let df = text_df("latitude", &[Some("45.0")]);
        let err = validate_check(&df, &CheckConfig::new("lat", CoordinateParams::latitude()))
            .unwrap_err();
        assert!(matches!(err, crate::CheckError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_validate_check_reports_bad_parameters() {
        let df = text_df("popularity", &[Some("5")]);
        let config = CheckConfig::new("popularity", RangeParams::between(10.0, 1.0));
        let err = validate_check(&df, &config).unwrap_err();
        assert!(matches!(err, crate::CheckError::InvalidParameter(_)));
    }

    #[test]
    fn test_allow_missing_suppresses_findings() {
        let mut df = text_df("city", &[None, Some("   "), Some("Roma")]);
        let params = mdq_model::TextParams {
            allow_missing: true,
            ..Default::default()
        };
        let outcome = check_text(&mut df, "city", &params).unwrap();
        assert!(outcome.passed());

        let outcome = check_text(&mut df, "city", &Default::default()).unwrap();
        assert_eq!(outcome.failed_rows(), vec![0, 1]);
    }
}
