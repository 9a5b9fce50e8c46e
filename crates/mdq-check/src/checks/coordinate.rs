//! Geographic coordinate columns (`latitude`, `longitude`).

use mdq_common::{format_numeric, parse_decimal};
use mdq_model::{CheckOutcome, CoordinateParams, FindingReason, RuleKind};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Coordinates must be decimal degrees within the axis bounds.
///
/// A decimal comma (`45,46`) is accepted and rewritten as `45.46`.
pub fn check_coordinate(
    df: &mut DataFrame,
    column: &str,
    params: &CoordinateParams,
) -> Result<CheckOutcome> {
    let (min, max) = params.axis.bounds();

    check_cells(
        df,
        column,
        RuleKind::Coordinate,
        params.allow_missing,
        |_, value| match parse_decimal(value) {
            None => Verdict::Invalid(FindingReason::NotNumeric),
            Some(degrees) if !(min..=max).contains(&degrees) => {
                Verdict::Invalid(FindingReason::OutOfRange)
            }
            Some(degrees) => Verdict::Valid(format_numeric(degrees)),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{cells, owned, text_df};
    use polars::prelude::*;

    #[test]
    fn test_latitude_bounds() {
        let mut df = text_df(
            "latitude",
            &[Some("45,46"), Some("-90"), Some("90.0001"), Some("north")],
        );
        let outcome = check_coordinate(&mut df, "latitude", &CoordinateParams::latitude()).unwrap();

        assert_eq!(outcome.corrected, 1);
        assert_eq!(
            outcome.findings.iter().map(|f| f.reason.clone()).collect::<Vec<_>>(),
            vec![FindingReason::OutOfRange, FindingReason::NotNumeric]
        );
        assert_eq!(
            cells(&df, "latitude"),
            owned(&[Some("45.46"), Some("-90"), Some("90.0001"), Some("north")])
        );
    }

    #[test]
    fn test_longitude_accepts_wider_range() {
        let mut df = text_df("longitude", &[Some("179.5"), Some("-180.5")]);
        let outcome =
            check_coordinate(&mut df, "longitude", &CoordinateParams::longitude()).unwrap();
        assert_eq!(outcome.failed_rows(), vec![1]);
    }

    #[test]
    fn test_float_column_is_left_untouched() {
        let mut df = df! { "latitude" => &[45.4642f64, 41.9028] }.unwrap();
        let outcome = check_coordinate(&mut df, "latitude", &CoordinateParams::latitude()).unwrap();

        assert!(outcome.passed());
        assert_eq!(outcome.corrected, 0);
        assert_eq!(df.column("latitude").unwrap().dtype(), &DataType::Float64);
    }
}
