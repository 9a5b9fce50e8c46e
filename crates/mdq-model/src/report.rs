//! Run report: ordered checker outcomes plus an optional table profile.

use serde::{Deserialize, Serialize};

use crate::outcome::CheckOutcome;

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub count: u64,
}

/// Table-wide quality summary that does not belong to any single checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableProfile {
    pub rows: u64,
    /// Columns with at least one missing value, in column order.
    pub missing_values: Vec<MissingCount>,
    /// Rows repeating an earlier row (first occurrence not listed).
    pub duplicate_rows: Vec<usize>,
    /// Columns no checker targeted.
    pub not_validated: Vec<String>,
}

impl TableProfile {
    pub fn missing_in(&self, column: &str) -> u64 {
        self.missing_values
            .iter()
            .find(|entry| entry.column == column)
            .map_or(0, |entry| entry.count)
    }
}

/// Ordered outcomes of one orchestrator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    outcomes: Vec<CheckOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<TableProfile>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_profile(&mut self, profile: TableProfile) {
        self.profile = Some(profile);
    }

    /// Outcomes in run order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn profile(&self) -> Option<&TableProfile> {
        self.profile.as_ref()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// First outcome with the given `"<kind>:<column>"` key.
    ///
    /// Two checkers of the same kind on one column share a key; use
    /// [`Report::get_all`] or [`Report::for_column`] to reach the later ones.
    pub fn get(&self, key: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.key() == key)
    }

    /// Every outcome with the given key, in run order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a CheckOutcome> {
        self.outcomes
            .iter()
            .filter(move |outcome| outcome.key() == key)
    }

    /// All outcomes that targeted `column`, in run order.
    pub fn for_column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CheckOutcome> {
        self.outcomes
            .iter()
            .filter(move |outcome| outcome.column == column)
    }

    pub fn total_failed(&self) -> u64 {
        self.outcomes.iter().map(|outcome| outcome.failed).sum()
    }

    pub fn total_corrected(&self) -> u64 {
        self.outcomes.iter().map(|outcome| outcome.corrected).sum()
    }

    pub fn has_findings(&self) -> bool {
        self.total_failed() > 0
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a CheckOutcome;
    type IntoIter = std::slice::Iter<'a, CheckOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FindingReason;
    use crate::rule::RuleKind;

    fn report() -> Report {
        let mut report = Report::new();
        let mut gender = CheckOutcome::new(RuleKind::Category, "gender", 4);
        gender.flag(2, Some("x".to_string()), FindingReason::Unrecognized);
        gender.record_correction();
        report.push(gender);
        report.push(CheckOutcome::new(RuleKind::Identifier, "id_author", 4));
        report.push(CheckOutcome::new(RuleKind::Text, "gender", 4));
        report
    }

    #[test]
    fn lookup_by_key_and_column() {
        let report = report();
        assert_eq!(report.get("category:gender").unwrap().failed, 1);
        assert!(report.get("date:gender").is_none());
        assert_eq!(report.for_column("gender").count(), 2);
    }

    #[test]
    fn shared_key_returns_first_and_get_all_reaches_every_outcome() {
        let mut report = Report::new();
        report.push(CheckOutcome::new(RuleKind::Text, "name", 4));
        let mut second = CheckOutcome::new(RuleKind::Text, "name", 4);
        second.flag(1, Some("Lucio Battisti".to_string()), FindingReason::TooLong {
            length: 14,
            max: 10,
        });
        report.push(second);

        assert_eq!(report.get("text:name").unwrap().failed, 0);
        let failed: Vec<u64> = report.get_all("text:name").map(|o| o.failed).collect();
        assert_eq!(failed, vec![0, 1]);
        assert_eq!(report.get_all("date:name").count(), 0);
    }

    #[test]
    fn totals() {
        let report = report();
        assert_eq!(report.len(), 3);
        assert_eq!(report.total_failed(), 1);
        assert_eq!(report.total_corrected(), 1);
        assert!(report.has_findings());
        assert!(!Report::new().has_findings());
    }

    #[test]
    fn profile_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Report::new()).unwrap();
        assert!(json.get("profile").is_none());
    }
}
