//! Theme snippet generator.
//!
//! Renders derived scales as copy-pasteable theme configuration: either CSS custom
//! properties or a utility-framework `colors` token map, in hex, HSL, or RGB notation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::models::{ColorScale, RgbColor, ShadeStep};
use crate::services::shades::generate_scale;

/// Color notation used for exported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorNotation {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `hsla(H, S%, L%, 1)`
    Hsl,
    /// `rgb(R, G, B)`
    Rgb,
}

impl ColorNotation {
    /// Formats a color in this notation.
    #[must_use]
    pub fn format(self, color: RgbColor) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Hsl => color.to_hsla_string(),
            Self::Rgb => color.to_rgb_string(),
        }
    }
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Rgb => "rgb",
        })
    }
}

impl FromStr for ColorNotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "hsl" | "hsla" => Ok(Self::Hsl),
            "rgb" => Ok(Self::Rgb),
            _ => anyhow::bail!("Invalid color format '{s}'. Must be 'hex', 'hsl', or 'rgb'"),
        }
    }
}

/// Shape of the exported snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTemplate {
    /// `:root { --color-1-50: ...; }`
    #[default]
    Css,
    /// `colors: { color1: { 50: "..." } }`
    Tailwind,
}

impl fmt::Display for ThemeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
        })
    }
}

impl FromStr for ThemeTemplate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "tailwind" => Ok(Self::Tailwind),
            _ => anyhow::bail!("Invalid template '{s}'. Must be 'css' or 'tailwind'"),
        }
    }
}

/// Formatted shades of one scale that survived export deduplication.
struct ScaleGroup {
    /// 1-based position of the scale in the input
    position: usize,
    entries: Vec<(ShadeStep, String)>,
}

/// Formats every scale's shades, skipping values already emitted by an earlier shade.
///
/// Deduplication is on the formatted value, so two hex colors that render to the same
/// HSL string count as one. Scales left with no entries are dropped.
fn collect_groups(scales: &[ColorScale], notation: ColorNotation) -> Vec<ScaleGroup> {
    let mut seen = HashSet::new();

    scales
        .iter()
        .enumerate()
        .filter_map(|(index, scale)| {
            let base = RgbColor::lenient(&scale.color);
            let entries: Vec<(ShadeStep, String)> = generate_scale(base)
                .into_iter()
                .map(|(step, color)| (step, notation.format(color)))
                .filter(|(_, value)| seen.insert(value.clone()))
                .collect();

            (!entries.is_empty()).then_some(ScaleGroup {
                position: index + 1,
                entries,
            })
        })
        .collect()
}

/// Renders scales as a theme snippet.
///
/// # Examples
///
/// ```
/// use tintscale::export::theme::{render_theme, ColorNotation, ThemeTemplate};
/// use tintscale::models::ColorScale;
///
/// let scales = vec![ColorScale::new(1, "#3b82f6")];
/// let css = render_theme(&scales, ThemeTemplate::Css, ColorNotation::Hex);
/// assert!(css.contains("--color-1-500: #3B82F6;"));
/// ```
#[must_use]
pub fn render_theme(
    scales: &[ColorScale],
    template: ThemeTemplate,
    notation: ColorNotation,
) -> String {
    let groups = collect_groups(scales, notation);
    match template {
        ThemeTemplate::Css => render_css(&groups),
        ThemeTemplate::Tailwind => render_tailwind(&groups),
    }
}

fn render_css(groups: &[ScaleGroup]) -> String {
    let mut output = String::from(":root {\n");
    for group in groups {
        for (step, value) in &group.entries {
            let _ = writeln!(output, "  --color-{}-{}: {};", group.position, step, value);
        }
    }
    output.push_str("}\n");
    output
}

fn render_tailwind(groups: &[ScaleGroup]) -> String {
    let body = groups
        .iter()
        .map(|group| {
            let entries = group
                .entries
                .iter()
                .map(|(step, value)| format!("    {step}: \"{value}\""))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("  color{}: {{\n{}\n  }}", group.position, entries)
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("colors: {{\n{body}\n}}\n")
}
