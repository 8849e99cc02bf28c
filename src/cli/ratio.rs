//! Ratio command: contrast between two specific colors.

use crate::cli::common::{load_config, parse_color, print_json, CliResult};
use crate::export::contrast_report::format_ratio;
use crate::models::WcagLevel;
use crate::services::contrast::{contrast_ratio, level_for_ratio};
use clap::Args;
use serde::Serialize;

/// Compute the WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct RatioArgs {
    /// First color (e.g., text)
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Second color (e.g., background)
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable ratio result
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RatioResponse {
    foreground: String,
    background: String,
    contrast: f64,
    level: String,
    min_text_size: String,
    #[serde(rename = "meetsAALarge")]
    meets_aa_large: bool,
    #[serde(rename = "meetsAA")]
    meets_aa: bool,
    #[serde(rename = "meetsAAA")]
    meets_aaa: bool,
}

impl RatioArgs {
    /// Execute the ratio command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let precision = config.analysis.ratio_precision;

        let foreground = parse_color(&self.foreground)?;
        let background = parse_color(&self.background)?;

        let ratio = contrast_ratio(foreground, background);
        let level = level_for_ratio(ratio);

        if self.json {
            print_json(&RatioResponse {
                foreground: foreground.to_hex(),
                background: background.to_hex(),
                contrast: precision.round(ratio),
                level: level.label().to_string(),
                min_text_size: level.min_text_size().to_string(),
                meets_aa_large: level >= WcagLevel::AaLarge,
                meets_aa: level >= WcagLevel::Aa,
                meets_aaa: level >= WcagLevel::Aaa,
            })?;
        } else {
            println!(
                "{} on {}: {} ({}, min text size: {})",
                foreground,
                background,
                format_ratio(precision.round(ratio), precision),
                level,
                level.min_text_size()
            );
        }

        Ok(())
    }
}
