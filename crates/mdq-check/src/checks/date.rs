//! Date columns (`birth_date`, `death_date`, `year`).
//!
//! Values are normalized to ISO 8601 `YYYY-MM-DD`. With `allow_partial`,
//! year-only and year-month values keep their precision (`1985`, `1985-03`).

use chrono::{NaiveDate, Utc};
use mdq_model::{CheckOutcome, DateParams, FindingReason, RuleKind};
use polars::prelude::DataFrame;

use super::{Verdict, check_cells};
use crate::error::Result;

/// A parsed date, at the precision the source provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// Full date: `YYYY-MM-DD`
    Day(NaiveDate),
    /// Year and month only: `YYYY-MM`
    Month { year: i32, month: u32 },
    /// Year only: `YYYY`
    Year(i32),
}

impl DateValue {
    /// Format to ISO 8601, preserving precision.
    pub fn to_iso8601(&self) -> String {
        match self {
            Self::Day(date) => date.format("%Y-%m-%d").to_string(),
            Self::Month { year, month } => format!("{year:04}-{month:02}"),
            Self::Year(year) => format!("{year:04}"),
        }
    }

    /// First and last calendar day covered by the value.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::Day(date) => Some((date, date)),
            Self::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)?
                };
                Some((first, next.pred_opt()?))
            }
            Self::Year(year) => Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            )),
        }
    }
}

/// Full-date formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 1943-03-05
    "%Y/%m/%d", // 1943/03/05
    "%d/%m/%Y", // European: 05/03/1943
    "%d.%m.%Y", // 05.03.1943
];

/// Parse a date cell.
///
/// Accepts the [`DATE_FORMATS`], ISO datetimes (the time part is dropped),
/// and Wikidata timestamps such as `+1943-03-05T00:00:00Z`. With
/// `allow_partial`, also `YYYY`, `YYYY-M(M)`, and Wikidata's zeroed
/// components (`+1943-00-00T00:00:00Z` is year precision).
pub fn parse_date_value(value: &str, allow_partial: bool) -> Option<DateValue> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let date_part = match trimmed.split_once(['T', ' ']) {
        Some((date, _time)) => date,
        None => trimmed,
    };

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
            return Some(DateValue::Day(date));
        }
    }

    if allow_partial {
        return parse_partial(date_part);
    }
    None
}

/// `YYYY`, `YYYY-M(M)`, and `YYYY-MM-00` / `YYYY-00-00`.
fn parse_partial(value: &str) -> Option<DateValue> {
    let mut parts = value.split('-');
    let year_text = parts.next()?;
    if year_text.len() != 4 || !year_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_text.parse().ok()?;

    let month = match parts.next() {
        None => return Some(DateValue::Year(year)),
        Some(text) => parse_component(text)?,
    };
    let day = match parts.next() {
        None => 0,
        Some(text) => parse_component(text)?,
    };
    if parts.next().is_some() {
        return None;
    }

    match (month, day) {
        (0, 0) => Some(DateValue::Year(year)),
        (1..=12, 0) => Some(DateValue::Month { year, month }),
        _ => None,
    }
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Dates must parse and fall inside `[min, max]`.
///
/// `max` defaults to today (UTC). A partial date is in range when any day it
/// covers is.
pub fn check_date(df: &mut DataFrame, column: &str, params: &DateParams) -> Result<CheckOutcome> {
    params.validate()?;
    let min = params.min;
    let max = params.max.unwrap_or_else(|| Utc::now().date_naive());

    check_cells(df, column, RuleKind::Date, params.allow_missing, |_, value| {
        let Some(parsed) = parse_date_value(value, params.allow_partial) else {
            return Verdict::Invalid(FindingReason::InvalidDate);
        };
        let Some((first, last)) = parsed.span() else {
            return Verdict::Invalid(FindingReason::InvalidDate);
        };
        if last < min {
            return Verdict::Invalid(FindingReason::TooOld);
        }
        if first > max {
            return Verdict::Invalid(FindingReason::TooRecent);
        }
        Verdict::Valid(parsed.to_iso8601())
    })
}
