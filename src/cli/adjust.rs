//! Adjust command: proportionally lighten or darken a single color.

use crate::cli::common::{load_config, parse_color, CliError, CliResult};
use crate::export::ColorNotation;
use clap::Args;

/// Lighten (positive factor) or darken (negative factor) a color
#[derive(Debug, Clone, Args)]
pub struct AdjustArgs {
    /// Color to adjust
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Adjustment factor between -1.0 (black) and 1.0 (double brightness)
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    pub factor: f64,

    /// Color notation: hex, hsl, or rgb (defaults to config)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
}

impl AdjustArgs {
    /// Execute the adjust command
    pub fn execute(&self) -> CliResult<()> {
        if !(-1.0..=1.0).contains(&self.factor) {
            return Err(CliError::validation(format!(
                "Invalid factor {}. Must be between -1.0 and 1.0",
                self.factor
            )));
        }

        let config = load_config()?;
        let notation = match &self.format {
            Some(value) => value
                .parse::<ColorNotation>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.format,
        };

        let color = parse_color(&self.color)?;
        println!("{}", notation.format(color.lighten_darken(self.factor)));

        Ok(())
    }
}
