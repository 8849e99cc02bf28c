//! Export command for generating theme configuration snippets.

use crate::cli::common::{load_config, CliError, CliResult, ScaleInput};
use crate::export::{render_theme, ColorNotation, ThemeTemplate};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export scales as CSS custom properties or a utility-framework color map
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scales: ScaleInput,

    /// Snippet template: css or tailwind (defaults to config)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Color notation: hex, hsl, or rgb (defaults to config)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let template = match &self.template {
            Some(value) => value
                .parse::<ThemeTemplate>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.template,
        };
        let notation = match &self.format {
            Some(value) => value
                .parse::<ColorNotation>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.format,
        };

        let scales = self.scales.resolve(&config)?;
        let snippet = render_theme(&scales, template, notation);

        tracing::debug!(%template, %notation, scales = scales.len(), "rendered theme snippet");

        match &self.output {
            Some(path) => {
                fs::write(path, &snippet)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                println!("✓ Exported {} theme to: {}", template, path.display());
            }
            None => print!("{snippet}"),
        }

        Ok(())
    }
}
