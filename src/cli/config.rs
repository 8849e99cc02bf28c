//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_color, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{ColorNotation, ThemeTemplate};
use crate::models::RatioPrecision;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default color notation (hex, hsl, or rgb)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Default export template (css or tailwind)
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<String>,

    /// Decimal places for contrast ratios (1 or 2)
    #[arg(long, value_name = "PLACES")]
    precision: Option<u8>,

    /// Base color used when a command is given no colors
    #[arg(long, value_name = "COLOR")]
    default_color: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    output: OutputSection,
    analysis: AnalysisSection,
    palette: PaletteSection,
}

#[derive(Serialize, Debug)]
struct OutputSection {
    format: String,
    template: String,
}

#[derive(Serialize, Debug)]
struct AnalysisSection {
    ratio_precision: u8,
}

#[derive(Serialize, Debug)]
struct PaletteSection {
    default_color: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&build_output(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.format.is_none()
            && self.template.is_none()
            && self.precision.is_none()
            && self.default_color.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --template, --precision, or --default-color",
            ));
        }

        // A broken config file is replaced rather than blocking the fix
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(format) = &self.format {
            config.output.format = format
                .parse::<ColorNotation>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(template) = &self.template {
            config.output.template = template
                .parse::<ThemeTemplate>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(places) = self.precision {
            config.analysis.ratio_precision =
                RatioPrecision::try_from(places).map_err(CliError::validation)?;
        }

        if let Some(color) = &self.default_color {
            config.palette.default_color = parse_color(color)?.to_hex();
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        tracing::info!("configuration saved");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        output: OutputSection {
            format: config.output.format.to_string(),
            template: config.output.template.to_string(),
        },
        analysis: AnalysisSection {
            ratio_precision: config.analysis.ratio_precision.into(),
        },
        palette: PaletteSection {
            default_color: config.palette.default_color.clone(),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        let note = if Config::exists() {
            ""
        } else {
            " (not created, using defaults)"
        };
        println!("Config File: {}{}", path.display(), note);
        println!();
    }

    println!("Output:");
    println!("  Format:   {}", config.output.format);
    println!("  Template: {}", config.output.template);
    println!();

    println!("Analysis:");
    println!(
        "  Ratio Precision: {} decimal place(s)",
        config.analysis.ratio_precision.places()
    );
    println!();

    println!("Palette:");
    println!("  Default Color: {}", config.palette.default_color);
    println!();
}
