//! Bounded numeric columns (`popularity`, `n_tracks`, `duration`).

use mdq_common::{format_numeric, parse_decimal};
use mdq_model::{CheckOutcome, FindingReason, RangeParams, RuleKind};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Values must be numeric and inside the inclusive `[min, max]` bounds.
///
/// Either bound may be omitted.
pub fn check_numeric_range(
    df: &mut DataFrame,
    column: &str,
    params: &RangeParams,
) -> Result<CheckOutcome> {
    params.validate()?;

    check_cells(
        df,
        column,
        RuleKind::NumericRange,
        params.allow_missing,
        |_, value| {
            let Some(number) = parse_decimal(value) else {
                return Verdict::Invalid(FindingReason::NotNumeric);
            };
            if params.min.is_some_and(|min| number < min) {
                return Verdict::Invalid(FindingReason::TooSmall);
            }
            if params.max.is_some_and(|max| number > max) {
                return Verdict::Invalid(FindingReason::TooLarge);
            }
            Verdict::Valid(format_numeric(number))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{cells, owned, text_df};

    #[test]
    fn test_bounds_are_inclusive() {
        let mut df = text_df(
            "popularity",
            &[Some("0"), Some("100"), Some("-1"), Some("100.5"), Some("n/a")],
        );
        let outcome =
            check_numeric_range(&mut df, "popularity", &RangeParams::between(0.0, 100.0)).unwrap();

        let reasons: Vec<_> = outcome.findings.iter().map(|f| (f.row, f.reason.clone())).collect();
        assert_eq!(
            reasons,
            vec![
                (2, FindingReason::TooSmall),
                (3, FindingReason::TooLarge),
                (4, FindingReason::NotNumeric),
            ]
        );
    }

    #[test]
    fn test_open_bounds_and_normalization() {
        let mut df = text_df("duration", &[Some(" 215.50 "), Some("1e3"), Some("3,5")]);
        let params = RangeParams {
            min: Some(0.0),
            ..RangeParams::default()
        };
        let outcome = check_numeric_range(&mut df, "duration", &params).unwrap();

        assert!(outcome.passed());
        assert_eq!(outcome.corrected, 3);
        assert_eq!(
            cells(&df, "duration"),
            owned(&[Some("215.5"), Some("1000"), Some("3.5")])
        );
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        let mut df = text_df("popularity", &[Some("1")]);
        let params = RangeParams {
            max: Some(f64::NAN),
            ..RangeParams::default()
        };
        assert!(check_numeric_range(&mut df, "popularity", &params).is_err());
    }
}
