//! Shades command: print the ten-level scale for each base color.

use crate::cli::common::{load_config, print_json, CliError, CliResult, ScaleInput};
use crate::export::ColorNotation;
use crate::models::{ColorScale, RgbColor, ShadeStep};
use crate::services::shades::generate_scale;
use clap::Args;
use serde::Serialize;

/// Generate tint/shade scales (50-900) from base colors
#[derive(Debug, Clone, Args)]
pub struct ShadesArgs {
    #[command(flatten)]
    pub scales: ScaleInput,

    /// Color notation: hex, hsl, or rgb (defaults to config)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable scale
#[derive(Serialize, Debug)]
struct ScaleOutput {
    id: u32,
    color: String,
    shades: Vec<ShadeOutput>,
}

#[derive(Serialize, Debug)]
struct ShadeOutput {
    shade: ShadeStep,
    value: String,
}

impl ShadesArgs {
    /// Execute the shades command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let notation = match &self.format {
            Some(format) => format
                .parse::<ColorNotation>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.format,
        };

        let scales = self.scales.resolve(&config)?;
        tracing::debug!(count = scales.len(), %notation, "generating shades");

        let output: Vec<ScaleOutput> = scales
            .iter()
            .map(|scale| build_scale_output(scale, notation))
            .collect();

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

fn build_scale_output(scale: &ColorScale, notation: ColorNotation) -> ScaleOutput {
    let shades = generate_scale(RgbColor::lenient(&scale.color))
        .into_iter()
        .map(|(shade, color)| ShadeOutput {
            shade,
            value: notation.format(color),
        })
        .collect();

    ScaleOutput {
        id: scale.id,
        color: scale.color.clone(),
        shades,
    }
}

fn output_human_readable(output: &[ScaleOutput]) {
    for (index, scale) in output.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Scale {} ({})", scale.id, scale.color);
        for shade in &scale.shades {
            println!("  {:>3}  {}", shade.shade.value(), shade.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scale_output_hex() {
        let output = build_scale_output(&ColorScale::new(1, "#3B82F6"), ColorNotation::Hex);
        assert_eq!(output.shades.len(), 10);
        assert_eq!(output.shades[0].shade, ShadeStep::S50);
        assert_eq!(output.shades[0].value, "#F5F9FF");
        assert_eq!(output.shades[5].value, "#3B82F6");
    }

    #[test]
    fn test_build_scale_output_json_shape() {
        let output = build_scale_output(&ColorScale::new(2, "#F59E0B"), ColorNotation::Rgb);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["shades"][5]["shade"], 500);
        assert_eq!(value["shades"][5]["value"], "rgb(245, 158, 11)");
    }
}
