//! Data model for the mdq data-quality toolkit.
//!
//! - **rule**: checker configuration (`CheckConfig`) and per-rule parameters
//! - **preset**: built-in category vocabularies (gender, language, region)
//! - **outcome**: per-checker findings
//! - **report**: ordered outcomes of a run plus the optional table profile

mod error;
mod outcome;
mod preset;
mod report;
mod rule;

pub use error::ParameterError;
pub use outcome::{CheckOutcome, Finding, FindingReason};
pub use preset::CategoryPreset;
pub use report::{MissingCount, Report, TableProfile};
pub use rule::{
    BooleanParams, CategoryParams, CheckConfig, CoordinateAxis, CoordinateParams, DateParams,
    FALSY_TOKENS, IdentifierParams, RangeParams, ResolvedCategory, Rule, RuleKind, TRUTHY_TOKENS,
    TextParams, UnrecognizedPolicy, default_min_date,
};
