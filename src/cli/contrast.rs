//! Contrast command: list accessible pairings across the derived scales.

use crate::cli::common::{load_config, print_json, CliError, CliResult, ScaleInput};
use crate::export::{render_contrast_markdown, render_contrast_table};
use crate::models::{ColorCombination, RatioPrecision, WcagLevel};
use crate::services::contrast::{analyze_with, filter_by_level, AnalysisOptions};
use clap::Args;
use serde::Serialize;

/// Find every WCAG-accessible color pairing across the generated scales
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    #[command(flatten)]
    pub scales: ScaleInput,

    /// Only show pairs at or above this level: aa-large, aa, or aaa
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<String>,

    /// Show at most this many pairs
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Decimal places for contrast ratios: 1 or 2 (defaults to config);
    /// levels are always judged on the unrounded ratio
    #[arg(long, value_name = "PLACES")]
    pub precision: Option<u8>,

    /// Output results as JSON
    #[arg(long, conflicts_with = "markdown")]
    pub json: bool,

    /// Output results as a markdown table
    #[arg(long)]
    pub markdown: bool,
}

/// JSON-serializable analysis result
#[derive(Serialize, Debug)]
struct ContrastResponse {
    scales: usize,
    count: usize,
    combinations: Vec<ColorCombination>,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        if self.limit == Some(0) {
            return Err(CliError::validation("Invalid limit 0. Must be at least 1"));
        }

        let config = load_config()?;

        let precision = match self.precision {
            Some(places) => RatioPrecision::try_from(places).map_err(CliError::validation)?,
            None => config.analysis.ratio_precision,
        };

        let min_level = self
            .min_level
            .as_deref()
            .map(str::parse::<WcagLevel>)
            .transpose()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let scales = self.scales.resolve(&config)?;
        let mut combinations = analyze_with(&scales, &AnalysisOptions { precision });

        if let Some(level) = min_level {
            combinations = filter_by_level(&combinations, level);
        }
        if let Some(limit) = self.limit {
            combinations.truncate(limit);
        }

        tracing::info!(
            scales = scales.len(),
            combinations = combinations.len(),
            "contrast analysis finished"
        );

        if self.json {
            print_json(&ContrastResponse {
                scales: scales.len(),
                count: combinations.len(),
                combinations,
            })?;
        } else if self.markdown {
            print!("{}", render_contrast_markdown(&combinations, precision));
        } else {
            print!("{}", render_contrast_table(&combinations, precision));
        }

        Ok(())
    }
}
