//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions and numeric parsing.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use mdq_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        // For any other type, use Display but strip outer quotes if present
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Only trims trailing zeros if the number contains a decimal point.
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use mdq_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Handles integer types, floating-point types, and string parsing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)).filter(|f| f.is_finite()),
        AnyValue::Float64(v) => Some(v).filter(|f| f.is_finite()),
        AnyValue::String(s) => parse_decimal(s),
        AnyValue::StringOwned(s) => parse_decimal(&s),
        _ => None,
    }
}

/// Parses a decimal number, accepting a single comma as decimal separator.
///
/// Returns `None` for empty strings and for non-finite results (`inf`, `NaN`).
///
/// # Examples
///
/// ```
/// use mdq_common::parse_decimal;
///
/// assert_eq!(parse_decimal(" 45.46 "), Some(45.46));
/// assert_eq!(parse_decimal("45,46"), Some(45.46));
/// assert_eq!(parse_decimal("1,234.5"), None);
/// assert_eq!(parse_decimal("NaN"), None);
/// ```
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = match trimmed.parse::<f64>() {
        Ok(v) => v,
        Err(_) if trimmed.matches(',').count() == 1 && !trimmed.contains('.') => {
            trimmed.replace(',', ".").parse::<f64>().ok()?
        }
        Err(_) => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(10.5), "10.5");
        assert_eq!(format_numeric(-12.25), "-12.25");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::String("2,5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("invalid")), None);
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  -100  "), Some(-100));
        assert_eq!(parse_i64("4.2"), None);
    }
}
