//! Error types for checkers and the orchestrator.
//!
//! Bad data never produces an error; it is recorded as a finding in the
//! report. Errors are reserved for configurations that cannot be applied.

use mdq_model::{ParameterError, Report};
use polars::prelude::PolarsError;
use thiserror::Error;

/// A single checker could not run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CheckError {
    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================
    /// Target column is not in the table.
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// The column name that was not found.
        column: String,
    },

    /// Parameters failed validation.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    // =========================================================================
    // TABLE ERRORS
    // =========================================================================
    /// Polars rejected a column read or write.
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

impl CheckError {
    /// True for errors caused by the checker configuration rather than the table.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. } | Self::InvalidParameter(_))
    }
}

/// A run was aborted before every checker completed.
///
/// Both variants carry the outcomes of the checkers that finished before the
/// failure; they are never silently discarded.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// A checker was misconfigured (unknown column, invalid parameters).
    #[error("checker #{index} on column '{column}' is misconfigured: {source}")]
    Configuration {
        /// Position of the failing checker in the configured sequence.
        index: usize,
        column: String,
        #[source]
        source: CheckError,
        /// Outcomes of the checkers that completed before the failure.
        completed: Box<Report>,
    },

    /// A checker failed while rewriting the table.
    #[error("checker #{index} on column '{column}' failed: {source}")]
    Execution {
        index: usize,
        column: String,
        #[source]
        source: CheckError,
        completed: Box<Report>,
    },
}

impl PipelineError {
    pub(crate) fn new(index: usize, column: &str, source: CheckError, completed: Report) -> Self {
        let column = column.to_string();
        let completed = Box::new(completed);
        if source.is_configuration() {
            Self::Configuration {
                index,
                column,
                source,
                completed,
            }
        } else {
            Self::Execution {
                index,
                column,
                source,
                completed,
            }
        }
    }

    /// Position of the failing checker.
    pub fn index(&self) -> usize {
        match self {
            Self::Configuration { index, .. } | Self::Execution { index, .. } => *index,
        }
    }

    /// Outcomes of the checkers that ran before the failure.
    pub fn completed(&self) -> &Report {
        match self {
            Self::Configuration { completed, .. } | Self::Execution { completed, .. } => completed,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result type for checker operations.
pub type Result<T> = std::result::Result<T, CheckError>;
