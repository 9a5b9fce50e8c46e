//! Table-wide quality profile.
//!
//! Complements the per-column checkers with what none of them sees on its
//! own: missing values in every column, fully duplicated rows, and columns no
//! checker was configured for.

use std::collections::HashMap;

use mdq_common::is_missing;
use mdq_model::{MissingCount, TableProfile};
use polars::prelude::DataFrame;

use crate::column_reader::ColumnReader;

/// Profile `df`.
///
/// * `checked_columns` - columns targeted by at least one checker
/// * `ignore_columns` - columns excluded from duplicate-row detection
///   (typically surrogate ids that differ between otherwise equal rows)
pub fn profile_table<S: AsRef<str>>(
    df: &DataFrame,
    checked_columns: &[S],
    ignore_columns: &[S],
) -> TableProfile {
    let reader = ColumnReader::new(df);
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let mut missing_values = Vec::new();
    let mut row_keys: Vec<Vec<Option<String>>> = vec![Vec::new(); reader.height()];

    for name in &names {
        let Ok(values) = reader.values(name) else {
            continue;
        };
        let compare = !ignore_columns.iter().any(|ignored| ignored.as_ref() == name);
        let mut missing = 0u64;
        for (idx, value) in values {
            if value.as_deref().is_none_or(is_missing) {
                missing += 1;
            }
            if compare && let Some(key) = row_keys.get_mut(idx) {
                key.push(value);
            }
        }
        if missing > 0 {
            missing_values.push(MissingCount {
                column: name.clone(),
                count: missing,
            });
        }
    }

    let mut first_seen: HashMap<Vec<Option<String>>, usize> = HashMap::new();
    let mut duplicate_rows = Vec::new();
    for (idx, key) in row_keys.into_iter().enumerate() {
        if *first_seen.entry(key).or_insert(idx) != idx {
            duplicate_rows.push(idx);
        }
    }

    let not_validated = names
        .iter()
        .filter(|name| {
            !checked_columns
                .iter()
                .any(|checked| checked.as_ref() == name.as_str())
        })
        .cloned()
        .collect();

    tracing::debug!(
        rows = reader.height(),
        missing_columns = missing_values.len(),
        duplicate_rows = duplicate_rows.len(),
        "Profiled table"
    );

    TableProfile {
        rows: reader.height() as u64,
        missing_values,
        duplicate_rows,
        not_validated,
    }
}
