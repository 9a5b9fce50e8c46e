//! Per-checker validation outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;

/// Why a row failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FindingReason {
    /// Null or blank where a value is required.
    Missing,
    NotInteger,
    NotPositive,
    /// Repeats the identifier first seen at `first_row`.
    Duplicate { first_row: usize },
    /// Not a parseable calendar date (e.g. `1990-02-30`).
    InvalidDate,
    TooOld,
    TooRecent,
    Unrecognized,
    NotBoolean,
    NotNumeric,
    OutOfRange,
    TooSmall,
    TooLarge,
    TooLong { length: usize, max: usize },
}

impl FindingReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotInteger => "not an integer",
            Self::NotPositive => "not positive",
            Self::Duplicate { .. } => "duplicate",
            Self::InvalidDate => "invalid date",
            Self::TooOld => "too old",
            Self::TooRecent => "too recent",
            Self::Unrecognized => "unrecognized",
            Self::NotBoolean => "not a boolean",
            Self::NotNumeric => "not numeric",
            Self::OutOfRange => "out of range",
            Self::TooSmall => "too small",
            Self::TooLarge => "too large",
            Self::TooLong { .. } => "too long",
        }
    }
}

impl fmt::Display for FindingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { first_row } => write!(f, "duplicate of row {first_row}"),
            Self::TooLong { length, max } => write!(f, "too long ({length} > {max})"),
            other => f.write_str(other.label()),
        }
    }
}

/// One flagged row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub row: usize,
    /// Original cell text; `None` for null cells.
    pub value: Option<String>,
    #[serde(flatten)]
    pub reason: FindingReason,
}

/// Result of running one checker over one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: RuleKind,
    pub column: String,
    /// Rows looked at (the table height).
    pub inspected: u64,
    /// Rows rewritten into canonical form.
    pub corrected: u64,
    /// Rows flagged; equals `findings.len()`.
    pub failed: u64,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    pub fn new(kind: RuleKind, column: impl Into<String>, inspected: u64) -> Self {
        Self {
            kind,
            column: column.into(),
            inspected,
            corrected: 0,
            failed: 0,
            findings: Vec::new(),
        }
    }

    /// Record a flagged row.
    pub fn flag(&mut self, row: usize, value: Option<String>, reason: FindingReason) {
        self.failed += 1;
        self.findings.push(Finding { row, value, reason });
    }

    pub fn record_correction(&mut self) {
        self.corrected += 1;
    }

    /// `"<kind>:<column>"`, matching [`crate::CheckConfig::key`].
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.column)
    }

    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    /// Rows that satisfy the rule after normalization.
    pub fn valid(&self) -> u64 {
        self.inspected.saturating_sub(self.failed)
    }

    /// Offending row indices, in row order.
    pub fn failed_rows(&self) -> Vec<usize> {
        self.findings.iter().map(|finding| finding.row).collect()
    }

    /// Up to `limit` distinct offending values, in row order.
    pub fn samples(&self, limit: usize) -> Vec<String> {
        let mut samples: Vec<String> = Vec::with_capacity(limit);
        for finding in &self.findings {
            if samples.len() >= limit {
                break;
            }
            let value = finding
                .value
                .clone()
                .unwrap_or_else(|| "<null>".to_string());
            if !samples.contains(&value) {
                samples.push(value);
            }
        }
        samples
    }

    /// Human-readable one-line summary.
    pub fn message(&self) -> String {
        if self.passed() {
            return format!(
                "{} {}: all {} rows valid ({} corrected)",
                self.kind, self.column, self.inspected, self.corrected
            );
        }
        let samples = self.samples(5);
        format!(
            "{} {}: {} of {} rows failed ({} corrected) (e.g., {})",
            self.kind,
            self.column,
            self.failed,
            self.inspected,
            self.corrected,
            samples.join(", ")
        )
    }
}
