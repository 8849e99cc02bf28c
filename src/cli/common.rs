//! Shared CLI plumbing: error type, exit codes, and scale input handling.

use clap::Args;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::{ColorScale, RgbColor};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: malformed color, invalid option value, bad input file contents
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// User input was rejected
    Validation,
    /// Reading or writing failed
    Io,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category, which determines the exit code
    pub kind: CliErrorKind,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Base colors for a command, given inline or through a JSON file.
#[derive(Debug, Clone, Args)]
pub struct ScaleInput {
    /// Base colors (e.g., "#3b82f6" "f59e0b"); each becomes one scale
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// JSON file with an array of {"id": <int>, "color": "<hex>"} entries
    #[arg(short, long, value_name = "FILE", conflicts_with = "colors")]
    pub input: Option<PathBuf>,
}

impl ScaleInput {
    /// Resolves the scales to analyze, falling back to the configured default color.
    ///
    /// Every color is validated strictly and normalized to uppercase `#RRGGBB`.
    pub fn resolve(&self, config: &Config) -> CliResult<Vec<ColorScale>> {
        let scales = if let Some(path) = &self.input {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read input file {}: {e}", path.display()))
            })?;
            serde_json::from_str::<Vec<ColorScale>>(&content).map_err(|e| {
                CliError::validation(format!("Invalid input file {}: {e}", path.display()))
            })?
        } else if self.colors.is_empty() {
            vec![ColorScale::new(1, config.palette.default_color.clone())]
        } else {
            ColorScale::from_colors(&self.colors)
        };

        scales
            .into_iter()
            .map(|scale| {
                let color = parse_color(&scale.color)?;
                Ok(ColorScale::new(scale.id, color.to_hex()))
            })
            .collect()
    }
}

/// Parses a user-supplied color strictly.
pub fn parse_color(value: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(value).map_err(|e| CliError::validation(e.to_string()))
}

/// Loads configuration, treating a broken config file as a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
