//! Text cleanup helpers shared by the checkers.

/// True when a cell should be treated as missing (empty or whitespace-only).
///
/// Null cells are rendered as empty strings by [`crate::any_to_string`], so
/// this covers both.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trims a value and collapses every internal whitespace run to one space.
///
/// # Examples
///
/// ```
/// use mdq_common::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Sfera   Ebbasta \t"), "Sfera Ebbasta");
/// ```
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
