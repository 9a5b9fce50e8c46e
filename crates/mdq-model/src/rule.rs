//! Checker configuration.
//!
//! A checker is a [`Rule`] variant (which function runs) plus its parameter
//! struct, bound to a target column by [`CheckConfig`]. Configurations are
//! plain data: they can be built in code or deserialized from a pipeline file.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::preset::CategoryPreset;

/// Textual tokens accepted as `true` (compared case-insensitively).
pub const TRUTHY_TOKENS: &[&str] = &["true", "t", "yes", "y", "1", "si", "sì", "vero"];

/// Textual tokens accepted as `false` (compared case-insensitively).
pub const FALSY_TOKENS: &[&str] = &["false", "f", "no", "n", "0", "falso"];

/// Identity of a checker function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Identifier,
    Date,
    Category,
    Coordinate,
    Boolean,
    Text,
    NumericRange,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Date => "date",
            Self::Category => "category",
            Self::Coordinate => "coordinate",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::NumericRange => "numeric_range",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured checker: a rule bound to a target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Column the rule inspects and normalizes.
    pub column: String,
    #[serde(flatten)]
    pub rule: Rule,
}

impl CheckConfig {
    pub fn new(column: impl Into<String>, rule: impl Into<Rule>) -> Self {
        Self {
            column: column.into(),
            rule: rule.into(),
        }
    }

    /// Key used to look the outcome up in a report (`"<kind>:<column>"`).
    pub fn key(&self) -> String {
        format!("{}:{}", self.rule.kind(), self.column)
    }
}

/// Rule variants with their bound parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    Identifier(IdentifierParams),
    Date(DateParams),
    Category(CategoryParams),
    Coordinate(CoordinateParams),
    Boolean(BooleanParams),
    Text(TextParams),
    NumericRange(RangeParams),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Identifier(_) => RuleKind::Identifier,
            Self::Date(_) => RuleKind::Date,
            Self::Category(_) => RuleKind::Category,
            Self::Coordinate(_) => RuleKind::Coordinate,
            Self::Boolean(_) => RuleKind::Boolean,
            Self::Text(_) => RuleKind::Text,
            Self::NumericRange(_) => RuleKind::NumericRange,
        }
    }

    /// Check the parameters without looking at any data.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match self {
            Self::Identifier(_) | Self::Coordinate(_) => Ok(()),
            Self::Date(params) => params.validate(),
            Self::Category(params) => params.resolve().map(|_| ()),
            Self::Boolean(params) => params.validate(),
            Self::Text(params) => params.validate(),
            Self::NumericRange(params) => params.validate(),
        }
    }
}

macro_rules! impl_into_rule {
    ($($params:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$params> for Rule {
                fn from(params: $params) -> Self {
                    Rule::$variant(params)
                }
            }
        )*
    };
}

impl_into_rule!(
    IdentifierParams => Identifier,
    DateParams => Date,
    CategoryParams => Category,
    CoordinateParams => Coordinate,
    BooleanParams => Boolean,
    TextParams => Text,
    RangeParams => NumericRange,
);

// =============================================================================
// IDENTIFIER
// =============================================================================

/// Identifiers must be present, positive integers, and (by default) unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentifierParams {
    pub allow_missing: bool,
    pub require_unique: bool,
}

impl Default for IdentifierParams {
    fn default() -> Self {
        Self {
            allow_missing: false,
            require_unique: true,
        }
    }
}

// =============================================================================
// DATE
// =============================================================================

/// Earliest plausible date when none is configured.
pub fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Dates must parse to a calendar date inside `[min, max]`.
///
/// `max` defaults to the current UTC date at check time. Bounds are
/// `YYYY-MM-DD` strings; in TOML they must be quoted (`min = "1900-01-01"`),
/// since a bare TOML date is not a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateParams {
    pub min: NaiveDate,
    pub max: Option<NaiveDate>,
    /// Accept `YYYY` and `YYYY-MM` values, canonicalized to that precision.
    pub allow_partial: bool,
    pub allow_missing: bool,
}

impl Default for DateParams {
    fn default() -> Self {
        Self {
            min: default_min_date(),
            max: None,
            allow_partial: false,
            allow_missing: false,
        }
    }
}

impl DateParams {
    pub fn between(min: NaiveDate, max: NaiveDate) -> Self {
        Self {
            min,
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        match self.max {
            Some(max) if max < self.min => Err(ParameterError::new(
                RuleKind::Date,
                format!("min {} is after max {}", self.min, max),
            )),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// What happens to a value that matches no allowed category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Leave the value in place and record a finding.
    #[default]
    Flag,
    /// Replace the value with null and record a finding.
    Drop,
    /// Replace the value with the given category and record a finding.
    Default(String),
}

/// Values must map onto a fixed category set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryParams {
    /// Built-in vocabulary merged with `allowed` and `synonyms`.
    pub preset: Option<CategoryPreset>,
    pub allowed: Vec<String>,
    /// Alternate spellings mapped onto an allowed category.
    pub synonyms: BTreeMap<String, String>,
    pub case_sensitive: bool,
    pub unrecognized: UnrecognizedPolicy,
    pub allow_missing: bool,
}

/// Category parameters with the preset merged in, ready for lookups.
#[derive(Debug, Clone)]
pub struct ResolvedCategory {
    /// Canonical categories, in configuration order.
    pub allowed: Vec<String>,
    /// Lookup key (lowercased unless case-sensitive) to canonical category.
    lookup: BTreeMap<String, String>,
    case_sensitive: bool,
}

impl ResolvedCategory {
    /// Canonical category for a trimmed raw value, if any.
    pub fn canonical(&self, value: &str) -> Option<&str> {
        if let Some(exact) = self.allowed.iter().find(|allowed| allowed.as_str() == value) {
            return Some(exact);
        }
        self.lookup.get(&self.key(value)).map(String::as_str)
    }

    fn key(&self, value: &str) -> String {
        if self.case_sensitive {
            value.to_string()
        } else {
            value.to_lowercase()
        }
    }
}

impl CategoryParams {
    pub fn preset(preset: CategoryPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Self::default()
        }
    }

    /// Gender mapped onto `M` / `F`.
    pub fn gender() -> Self {
        Self::preset(CategoryPreset::Gender)
    }

    pub fn allowed<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_synonym(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.synonyms.insert(raw.into(), canonical.into());
        self
    }

    pub fn with_policy(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }

    /// Merge the preset and validate the result.
    pub fn resolve(&self) -> Result<ResolvedCategory, ParameterError> {
        let mut allowed: Vec<String> = Vec::new();
        let mut synonyms: Vec<(String, String)> = Vec::new();
        if let Some(preset) = self.preset {
            allowed.extend(preset.allowed().iter().map(|v| (*v).to_string()));
            synonyms.extend(
                preset
                    .synonyms()
                    .iter()
                    .map(|(raw, canonical)| ((*raw).to_string(), (*canonical).to_string())),
            );
        }
        for value in &self.allowed {
            let value = value.trim();
            if !value.is_empty() && !allowed.iter().any(|existing| existing == value) {
                allowed.push(value.to_string());
            }
        }
        synonyms.extend(
            self.synonyms
                .iter()
                .map(|(raw, canonical)| (raw.trim().to_string(), canonical.trim().to_string())),
        );

        if allowed.is_empty() {
            return Err(ParameterError::new(
                RuleKind::Category,
                "allowed category set is empty",
            ));
        }

        let mut resolved = ResolvedCategory {
            allowed,
            lookup: BTreeMap::new(),
            case_sensitive: self.case_sensitive,
        };
        for value in resolved.allowed.clone() {
            resolved.lookup.insert(resolved.key(&value), value);
        }
        for (raw, canonical) in synonyms {
            if !resolved.allowed.contains(&canonical) {
                return Err(ParameterError::new(
                    RuleKind::Category,
                    format!("synonym '{raw}' maps to '{canonical}', which is not an allowed category"),
                ));
            }
            let key = resolved.key(&raw);
            resolved.lookup.entry(key).or_insert(canonical);
        }
        if let UnrecognizedPolicy::Default(token) = &self.unrecognized
            && !resolved.allowed.iter().any(|allowed| allowed == token)
        {
            return Err(ParameterError::new(
                RuleKind::Category,
                format!("default '{token}' is not an allowed category"),
            ));
        }
        Ok(resolved)
    }
}

// =============================================================================
// COORDINATE
// =============================================================================

/// Which geographic axis a coordinate column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

impl CoordinateAxis {
    /// Inclusive valid bounds in decimal degrees.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinateParams {
    pub axis: CoordinateAxis,
    #[serde(default)]
    pub allow_missing: bool,
}

impl CoordinateParams {
    pub fn latitude() -> Self {
        Self {
            axis: CoordinateAxis::Latitude,
            allow_missing: false,
        }
    }

    pub fn longitude() -> Self {
        Self {
            axis: CoordinateAxis::Longitude,
            allow_missing: false,
        }
    }
}

// =============================================================================
// BOOLEAN
// =============================================================================

/// Values must coerce from a known truthy/falsy token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanParams {
    /// Extra tokens accepted as `true`, on top of [`TRUTHY_TOKENS`].
    pub truthy: Vec<String>,
    /// Extra tokens accepted as `false`, on top of [`FALSY_TOKENS`].
    pub falsy: Vec<String>,
    pub allow_missing: bool,
}

impl BooleanParams {
    /// Lowercased truthy and falsy token sets.
    pub fn token_sets(&self) -> (BTreeSet<String>, BTreeSet<String>) {
        let truthy = TRUTHY_TOKENS
            .iter()
            .map(|token| (*token).to_string())
            .chain(self.truthy.iter().map(|token| token.trim().to_lowercase()))
            .collect();
        let falsy = FALSY_TOKENS
            .iter()
            .map(|token| (*token).to_string())
            .chain(self.falsy.iter().map(|token| token.trim().to_lowercase()))
            .collect();
        (truthy, falsy)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        let (truthy, falsy) = self.token_sets();
        if let Some(token) = truthy.intersection(&falsy).next() {
            return Err(ParameterError::new(
                RuleKind::Boolean,
                format!("token '{token}' is both truthy and falsy"),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Free text is trimmed and whitespace-collapsed, optionally length-bounded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextParams {
    /// Maximum length in characters after cleanup.
    pub max_length: Option<usize>,
    pub allow_missing: bool,
}

impl TextParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.max_length == Some(0) {
            return Err(ParameterError::new(
                RuleKind::Text,
                "max_length must be greater than zero",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// NUMERIC RANGE
// =============================================================================

/// Values must be numeric and inside the inclusive `[min, max]` bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allow_missing: bool,
}

impl RangeParams {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            allow_missing: false,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        for bound in [self.min, self.max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ParameterError::new(
                    RuleKind::NumericRange,
                    format!("bound {bound} is not a finite number"),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ParameterError::new(
                RuleKind::NumericRange,
                format!("min {min} is greater than max {max}"),
            ));
        }
        Ok(())
    }
}
