//! The `DataQuality` orchestrator.
//!
//! Runs an ordered sequence of configured checkers over one table and
//! collects their outcomes into a [`Report`]. The table is borrowed
//! exclusively for the whole run; each checker sees the mutations of the
//! checkers before it.

use std::time::Instant;

use mdq_model::{CheckConfig, Report};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use crate::checks::{run_check, validate_check};
use crate::error::PipelineError;
use crate::profile::profile_table;

/// Lifecycle of a [`DataQuality`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Checkers configured, no run started.
    Configured,
    Running,
    /// Last run finished; its report is available from [`DataQuality::last_report`].
    Completed,
    /// Last run stopped on an error.
    Aborted,
}

/// Ordered checker pipeline.
///
/// # Example
///
/// ```ignore
/// let mut quality = DataQuality::new(vec![
///     CheckConfig::new("id_author", IdentifierParams::default()),
///     CheckConfig::new("gender", CategoryParams::gender()),
/// ]);
/// let report = quality.run(&mut df)?;
/// ```
#[derive(Debug, Clone)]
pub struct DataQuality {
    checks: Vec<CheckConfig>,
    /// Columns ignored by duplicate-row detection; `None` disables the profile.
    profile: Option<Vec<String>>,
    state: RunState,
    last_report: Option<Report>,
}

impl DataQuality {
    pub fn new(checks: Vec<CheckConfig>) -> Self {
        Self {
            checks,
            profile: None,
            state: RunState::Configured,
            last_report: None,
        }
    }

    /// Attach a table profile to every report.
    #[must_use]
    pub fn with_profile<I, S>(mut self, ignore_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile = Some(ignore_columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn checks(&self) -> &[CheckConfig] {
        &self.checks
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Report of the last completed run.
    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Check every configuration against `df` without running anything.
    pub fn validate(&self, df: &DataFrame) -> Result<(), PipelineError> {
        for (index, config) in self.checks.iter().enumerate() {
            validate_check(df, config)
                .map_err(|err| PipelineError::new(index, &config.column, err, Report::new()))?;
        }
        Ok(())
    }

    /// Run every checker in order, mutating `df` in place.
    ///
    /// Configurations are validated up front; a misconfigured checker aborts
    /// the run before the table is touched.
    pub fn run(&mut self, df: &mut DataFrame) -> Result<Report, PipelineError> {
        let run_span = info_span!("data_quality", checks = self.checks.len(), rows = df.height());
        let _run_guard = run_span.enter();
        let run_start = Instant::now();

        self.state = RunState::Running;

        if let Err(err) = self.validate(df) {
            warn!(index = err.index(), error = %err, "Preflight failed; table untouched");
            self.state = RunState::Aborted;
            return Err(err);
        }

        let mut report = Report::new();
        for (index, config) in self.checks.iter().enumerate() {
            debug!(index, check = %config.rule.kind(), column = %config.column, "Running checker");
            match run_check(df, config) {
                Ok(outcome) => report.push(outcome),
                Err(err) => {
                    warn!(
                        index,
                        column = %config.column,
                        completed = report.len(),
                        error = %err,
                        "Checker failed; aborting run"
                    );
                    self.state = RunState::Aborted;
                    return Err(PipelineError::new(index, &config.column, err, report));
                }
            }
        }

        if let Some(ignore_columns) = &self.profile {
            let checked: Vec<&str> = self.checks.iter().map(|c| c.column.as_str()).collect();
            let ignored: Vec<&str> = ignore_columns.iter().map(String::as_str).collect();
            report.set_profile(profile_table(df, &checked, &ignored));
        }

        info!(
            checks = report.len(),
            failed = report.total_failed(),
            corrected = report.total_corrected(),
            duration_ms = run_start.elapsed().as_millis(),
            "Data quality run complete"
        );

        self.state = RunState::Completed;
        self.last_report = Some(report.clone());
        Ok(report)
    }
}
