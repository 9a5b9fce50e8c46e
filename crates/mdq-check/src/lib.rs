//! Column checkers and the `DataQuality` orchestrator.
//!
//! Checkers validate one column each, normalize recoverable values in place,
//! and record a finding for every row they cannot accept. [`DataQuality`]
//! runs a configured sequence of them and returns a [`Report`].
//!
//! # Example
//!
//! ```ignore
//! use mdq_check::{CategoryParams, CheckConfig, DataQuality, DateParams};
//!
//! let mut quality = DataQuality::new(vec![
//!     CheckConfig::new("birth_date", DateParams::default()),
//!     CheckConfig::new("gender", CategoryParams::gender()),
//! ]);
//! let report = quality.run(&mut df)?;
//! for outcome in &report {
//!     println!("{}", outcome.message());
//! }
//! ```

mod checks;
mod column_reader;
mod error;
mod orchestrator;
mod profile;

// === Errors ===
pub use error::{CheckError, PipelineError, Result};

// === Checkers ===
pub use checks::{
    DateValue, check_boolean, check_category, check_coordinate, check_date, check_identifier,
    check_numeric_range, check_text, parse_date_value, run_check, validate_check,
};
pub use column_reader::{ColumnReader, ColumnRewrite, ColumnValueIter};

// === Orchestration ===
pub use orchestrator::{DataQuality, RunState};
pub use profile::profile_table;

// === Model ===
pub use mdq_model::{
    BooleanParams, CategoryParams, CategoryPreset, CheckConfig, CheckOutcome, CoordinateAxis,
    CoordinateParams, DateParams, Finding, FindingReason, IdentifierParams, MissingCount,
    ParameterError, RangeParams, Report, Rule, RuleKind, TableProfile, TextParams,
    UnrecognizedPolicy,
};
