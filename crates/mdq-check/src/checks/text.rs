//! Free-text columns (`name`, `title`, `birth_place`).

use mdq_common::collapse_whitespace;
use mdq_model::{CheckOutcome, FindingReason, RuleKind, TextParams};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Text is trimmed and whitespace-collapsed; optionally length-bounded.
///
/// Length is counted in characters after cleanup. Over-long values are
/// flagged and kept as they were.
pub fn check_text(df: &mut DataFrame, column: &str, params: &TextParams) -> Result<CheckOutcome> {
    params.validate()?;

    check_cells(df, column, RuleKind::Text, params.allow_missing, |_, value| {
        let cleaned = collapse_whitespace(value);
        let length = cleaned.chars().count();
        match params.max_length {
            Some(max) if length > max => Verdict::Invalid(FindingReason::TooLong { length, max }),
            _ => Verdict::Valid(cleaned),
        }
    })
}
