//! Categorical columns (`gender`, `language`, `region`).
//!
//! Matching order: exact allowed value, then case-insensitive match (unless
//! `case_sensitive`), then synonym. Values that match nothing are handled by
//! the configured [`UnrecognizedPolicy`].

use mdq_model::{CategoryParams, CheckOutcome, FindingReason, RuleKind, UnrecognizedPolicy};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Values must map onto the allowed category set.
pub fn check_category(
    df: &mut DataFrame,
    column: &str,
    params: &CategoryParams,
) -> Result<CheckOutcome> {
    let resolved = params.resolve()?;

    check_cells(
        df,
        column,
        RuleKind::Category,
        params.allow_missing,
        |_, value| match resolved.canonical(value.trim()) {
            Some(canonical) => Verdict::Valid(canonical.to_string()),
            None => match &params.unrecognized {
                UnrecognizedPolicy::Flag => Verdict::Invalid(FindingReason::Unrecognized),
                UnrecognizedPolicy::Drop => Verdict::Replaced(None, FindingReason::Unrecognized),
                UnrecognizedPolicy::Default(token) => {
                    Verdict::Replaced(Some(token.clone()), FindingReason::Unrecognized)
                }
            },
        },
    )
}
