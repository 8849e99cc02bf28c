//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_BASE_COLOR};
use crate::export::{ColorNotation, ThemeTemplate};
use crate::models::{RatioPrecision, RgbColor};

/// Output formatting defaults for exported snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Color notation for exported values (hex, hsl, rgb)
    pub format: ColorNotation,
    /// Snippet shape (css, tailwind)
    pub template: ThemeTemplate,
}

/// Contrast analysis settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Decimal places kept on reported contrast ratios (1 or 2)
    pub ratio_precision: RatioPrecision,
}

/// Palette defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base color used when a command is given no colors
    pub default_color: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_BASE_COLOR.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TintScale/config.toml`
/// - macOS: `~/Library/Application Support/TintScale/config.toml`
/// - Windows: `%APPDATA%\TintScale\config.toml`
///
/// The directory can be overridden with the `TINTSCALE_CONFIG_DIR` environment variable.
///
/// # Validation
///
/// - `default_color` must be a valid hex color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Export formatting
    pub output: OutputConfig,
    /// Contrast analysis
    pub analysis: AnalysisConfig,
    /// Palette defaults
    pub palette: PaletteConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `TINTSCALE_CONFIG_DIR`.
    ///
    /// - Linux: `~/.config/TintScale/`
    /// - macOS: `~/Library/Application Support/TintScale/`
    /// - Windows: `%APPDATA%\TintScale\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Loads configuration from the config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).context(format!(
            "Failed to read config file: {}",
            path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        RgbColor::from_hex(&self.palette.default_color).context(format!(
            "Invalid palette.default_color '{}'",
            self.palette.default_color
        ))?;

        Ok(())
    }
}
