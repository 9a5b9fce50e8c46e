//! Shared utilities for the mdq crates.
//!
//! - **values**: `AnyValue` conversions used when scanning table cells
//! - **text**: missing-value detection and whitespace cleanup

mod values;
mod text;

pub use values::{any_to_f64, any_to_string, format_numeric, parse_decimal, parse_i64};
pub use text::{collapse_whitespace, is_missing};
