//! CLI argument definitions for mdq.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mdq",
    version,
    about = "Data-quality checks for music metadata dumps",
    long_about = "Validate and normalize columns of artist and track CSV dumps.\n\n\
                  Checkers are configured in a TOML pipeline file; the run prints\n\
                  a summary and can write the cleaned table and a JSON report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values in trace-level finding logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a pipeline file over a CSV dump.
    Check(CheckArgs),

    /// Print missing values, duplicate rows, and column counts for a CSV dump.
    Profile(ProfileArgs),

    /// List the built-in category presets.
    Presets,
}

#[derive(Args)]
pub struct CheckArgs {
    /// CSV dump to check.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// TOML pipeline file.
    #[arg(long = "config", short = 'c', value_name = "TOML")]
    pub config: PathBuf,

    /// Write the cleaned table to this CSV path.
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Write the report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Exit with status 1 when any checker records a finding.
    #[arg(long = "fail-on-findings")]
    pub fail_on_findings: bool,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// CSV dump to profile.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Field delimiter (single character, `\t` for tab).
    #[arg(long = "delimiter", short = 'd', default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Column excluded from duplicate-row detection (repeatable).
    #[arg(long = "ignore", value_name = "COLUMN")]
    pub ignore: Vec<String>,

    /// Read every column as text.
    #[arg(long = "no-infer")]
    pub no_infer: bool,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    let raw = if raw == "\\t" { "\t" } else { raw };
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got {raw:?}")),
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
