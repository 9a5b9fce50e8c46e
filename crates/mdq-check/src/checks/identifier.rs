//! Identifier columns (`id_author`, `id`).

use std::collections::HashMap;

use mdq_common::{parse_decimal, parse_i64};
use mdq_model::{CheckOutcome, FindingReason, IdentifierParams, RuleKind};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Largest float that still converts to `i64` without saturating.
const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

/// Parse an identifier, accepting integral floats such as `"42.0"`.
fn parse_identifier(value: &str) -> Option<i64> {
    if let Some(id) = parse_i64(value) {
        return Some(id);
    }
    let float = parse_decimal(value)?;
    (float.fract() == 0.0 && float.abs() <= MAX_EXACT_ID).then_some(float as i64)
}

/// Identifiers must be positive integers and, unless disabled, unique.
///
/// Later occurrences of a repeated identifier are flagged with the row of its
/// first occurrence; the first occurrence itself passes.
pub fn check_identifier(
    df: &mut DataFrame,
    column: &str,
    params: &IdentifierParams,
) -> Result<CheckOutcome> {
    let mut first_seen: HashMap<i64, usize> = HashMap::new();

    check_cells(
        df,
        column,
        RuleKind::Identifier,
        params.allow_missing,
        |idx, value| {
            let Some(id) = parse_identifier(value) else {
                return Verdict::Invalid(FindingReason::NotInteger);
            };
            if id <= 0 {
                return Verdict::Invalid(FindingReason::NotPositive);
            }
            if params.require_unique {
                let first_row = *first_seen.entry(id).or_insert(idx);
                if first_row != idx {
                    return Verdict::Invalid(FindingReason::Duplicate { first_row });
                }
            }
            Verdict::Valid(id.to_string())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{cells, owned, text_df};

    #[test]
    fn test_canonicalizes_integer_text() {
        let mut df = text_df("id_author", &[Some(" 042 "), Some("7.0"), Some("9")]);
        let outcome = check_identifier(&mut df, "id_author", &IdentifierParams::default()).unwrap();

        assert!(outcome.passed());
        assert_eq!(outcome.corrected, 2);
        assert_eq!(
            cells(&df, "id_author"),
            owned(&[Some("42"), Some("7"), Some("9")])
        );
    }

    #[test]
    fn test_flags_invalid_identifiers() {
        let mut df = text_df(
            "id_author",
            &[Some("abc"), Some("0"), Some("-3"), Some("4.5"), None],
        );
        let outcome = check_identifier(&mut df, "id_author", &IdentifierParams::default()).unwrap();

        let reasons: Vec<_> = outcome.findings.iter().map(|f| f.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                FindingReason::NotInteger,
                FindingReason::NotPositive,
                FindingReason::NotPositive,
                FindingReason::NotInteger,
                FindingReason::Missing,
            ]
        );
        assert_eq!(outcome.corrected, 0);
    }

    #[test]
    fn test_duplicates_reference_first_occurrence() {
        let mut df = text_df("id", &[Some("1"), Some("2"), Some("01"), Some("1")]);
        let outcome = check_identifier(&mut df, "id", &IdentifierParams::default()).unwrap();

        assert_eq!(outcome.failed_rows(), vec![2, 3]);
        assert_eq!(
            outcome.findings[0].reason,
            FindingReason::Duplicate { first_row: 0 }
        );
        // Flagged duplicates keep their original text.
        assert_eq!(cells(&df, "id")[2], Some("01".to_string()));
    }

    #[test]
    fn test_uniqueness_can_be_disabled() {
        let mut df = text_df("id", &[Some("1"), Some("1")]);
        let params = IdentifierParams {
            require_unique: false,
            ..IdentifierParams::default()
        };
        assert!(check_identifier(&mut df, "id", &params).unwrap().passed());
    }
}
