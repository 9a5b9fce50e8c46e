//! TOML pipeline files.
//!
//! A pipeline file names the CSV dialect, whether to attach a table profile,
//! and the ordered checker list:
//!
//! ```toml
//! [input]
//! delimiter = ";"
//! infer_types = true
//!
//! [profile]
//! enabled = true
//! ignore_columns = ["id_author"]
//!
//! [[checks]]
//! column = "gender"
//! kind = "category"
//! preset = "gender"
//! unrecognized = "flag"
//! ```
//!
//! Unknown keys are rejected at every level, including inside a check.
//! Date bounds are quoted strings (`min = "1900-01-01"`); bare TOML dates
//! are a parse error.

use std::path::{Path, PathBuf};

use mdq_check::{CheckConfig, DataQuality, ParameterError};
use mdq_ingest::CsvOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a pipeline file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path} configures no checks")]
    NoChecks { path: PathBuf },

    #[error("{path}: check #{index} on '{column}' is invalid: {source}")]
    InvalidCheck {
        path: PathBuf,
        index: usize,
        column: String,
        #[source]
        source: ParameterError,
    },
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Table profile settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileSection {
    pub enabled: bool,
    /// Columns excluded from duplicate-row detection.
    pub ignore_columns: Vec<String>,
}

/// A parsed pipeline file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineFile {
    #[serde(default)]
    pub input: CsvOptions,
    #[serde(default)]
    pub profile: ProfileSection,
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

impl PipelineFile {
    /// Build the orchestrator described by this file.
    pub fn data_quality(&self) -> DataQuality {
        let quality = DataQuality::new(self.checks.clone());
        if self.profile.enabled {
            quality.with_profile(self.profile.ignore_columns.iter().cloned())
        } else {
            quality
        }
    }
}

/// Load and validate a pipeline file.
///
/// Column names are not checked here; that happens against the table at run
/// time.
pub fn load_pipeline(path: &Path) -> Result<PipelineFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    parse_pipeline(&contents, path)
}

/// Parse pipeline TOML; `path` is only used in error messages.
pub fn parse_pipeline(contents: &str, path: &Path) -> Result<PipelineFile, ConfigError> {
    let pipeline: PipelineFile = toml::from_str(contents).map_err(|e| ConfigError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;

    if pipeline.checks.is_empty() {
        return Err(ConfigError::NoChecks {
            path: path.to_path_buf(),
        });
    }
    for (index, check) in pipeline.checks.iter().enumerate() {
        check
            .rule
            .validate()
            .map_err(|source| ConfigError::InvalidCheck {
                path: path.to_path_buf(),
                index,
                column: check.column.clone(),
                source,
            })?;
    }
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdq_check::{CategoryPreset, Rule, UnrecognizedPolicy};

    fn parse(source: &str) -> Result<PipelineFile, ConfigError> {
        parse_pipeline(source, Path::new("pipeline.toml"))
    }

    #[test]
    fn test_parse_full_pipeline() {
        let pipeline = parse(
            r#"
            [input]
            delimiter = ";"
            infer_types = false

            [profile]
            enabled = true
            ignore_columns = ["id_author"]

            [[checks]]
            column = "gender"
            kind = "category"
            preset = "gender"
            unrecognized = "drop"
            "#,
        )
        .unwrap();

        assert_eq!(pipeline.input.delimiter, b';');
        assert!(!pipeline.input.infer_types);
        assert!(pipeline.profile.enabled);
        assert_eq!(pipeline.profile.ignore_columns, vec!["id_author"]);
        match &pipeline.checks[0].rule {
            Rule::Category(params) => {
                assert_eq!(params.preset, Some(CategoryPreset::Gender));
                assert_eq!(params.unrecognized, UnrecognizedPolicy::Drop);
            }
            other => panic!("unexpected rule {other:?}"),
        }
    }

    #[test]
    fn test_sections_default() {
        let pipeline = parse(
            r#"
            [[checks]]
            column = "name"
            kind = "text"
            "#,
        )
        .unwrap();
        assert_eq!(pipeline.input, CsvOptions::default());
        assert!(!pipeline.profile.enabled);
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let err = parse("[input]\ndelimiter = \",\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoChecks { .. }));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let err = parse(
            r#"
            [[checks]]
            column = "popularity"
            kind = "numeric_range"
            min = 10
            max = 1
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::InvalidCheck { index, column, .. } => {
                assert_eq!(index, 0);
                assert_eq!(column, "popularity");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = parse(
            r#"
            [[checks]]
            column = "name"
            kind = "spellcheck"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_misspelled_check_key_rejected() {
        let err = parse(
            r#"
            [[checks]]
            column = "birth_date"
            kind = "date"
            allow_mising = true
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Toml { source, .. } => {
                assert!(source.to_string().contains("allow_mising"), "{source}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_date_bounds_must_be_quoted() {
        let quoted = parse(
            r#"
            [[checks]]
            column = "birth_date"
            kind = "date"
            min = "1900-01-01"
            "#,
        );
        assert!(quoted.is_ok());

        let bare = parse(
            r#"
            [[checks]]
            column = "birth_date"
            kind = "date"
            min = 1900-01-01
            "#,
        );
        assert!(matches!(bare, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let err = parse("verbose = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_pipeline(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
