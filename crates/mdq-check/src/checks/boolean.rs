//! Boolean flag columns (`explicit`, `active`).

use mdq_model::{BooleanParams, CheckOutcome, FindingReason, RuleKind};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// Values must be a known truthy or falsy token; rewritten as `true`/`false`.
pub fn check_boolean(
    df: &mut DataFrame,
    column: &str,
    params: &BooleanParams,
) -> Result<CheckOutcome> {
    params.validate()?;
    let (truthy, falsy) = params.token_sets();

    check_cells(
        df,
        column,
        RuleKind::Boolean,
        params.allow_missing,
        |_, value| {
            let token = value.trim().to_lowercase();
            if truthy.contains(&token) {
                Verdict::Valid("true".to_string())
            } else if falsy.contains(&token) {
                Verdict::Valid("false".to_string())
            } else {
                Verdict::Invalid(FindingReason::NotBoolean)
            }
        },
    )
}
