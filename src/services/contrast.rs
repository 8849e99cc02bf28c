//! WCAG contrast ratios and all-pairs analysis across derived scales.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{ColorCombination, ColorInfo, ColorScale, RatioPrecision, RgbColor, WcagLevel};
use crate::services::shades::generate_scale;

/// Minimum ratio for large text; pairs below it are dropped from analysis.
pub const AA_LARGE_THRESHOLD: f64 = 3.1;

/// Minimum ratio for normal text.
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum ratio for enhanced contrast.
pub const AAA_THRESHOLD: f64 = 7.0;

/// Options for [`analyze_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Decimal places kept on reported ratios
    pub precision: RatioPrecision,
}

/// WCAG contrast ratio between two colors, from 1.0 (identical) to 21.0 (black on white).
///
/// Symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use tintscale::models::RgbColor;
/// use tintscale::services::contrast::contrast_ratio;
///
/// let ratio = contrast_ratio(RgbColor::new(0, 0, 0), RgbColor::new(255, 255, 255));
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let l1 = a.relative_luminance();
    let l2 = b.relative_luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex strings; malformed input reads as black.
#[must_use]
pub fn get_contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    contrast_ratio(RgbColor::lenient(hex_a), RgbColor::lenient(hex_b))
}

/// Highest WCAG level an unrounded ratio satisfies.
#[must_use]
pub fn level_for_ratio(ratio: f64) -> WcagLevel {
    if ratio >= AAA_THRESHOLD {
        WcagLevel::Aaa
    } else if ratio >= AA_THRESHOLD {
        WcagLevel::Aa
    } else if ratio >= AA_LARGE_THRESHOLD {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

/// Builds the candidate pool: every derived shade of every scale, in scale order then
/// level order, keeping only the first occurrence of each hex value.
///
/// A color shared by several scales is attributed to the earliest one.
#[must_use]
pub fn collect_colors(scales: &[ColorScale]) -> Vec<ColorInfo> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut colors = Vec::with_capacity(scales.len() * 10);

    for (scale_index, scale) in scales.iter().enumerate() {
        for (shade, color) in generate_scale(RgbColor::lenient(&scale.color)) {
            let hex = color.to_hex();
            if seen.insert(hex.to_lowercase()) {
                colors.push(ColorInfo {
                    hex,
                    shade,
                    scale_id: scale.id,
                    scale_index,
                });
            }
        }
    }

    colors
}

/// Finds every accessible pairing across the given scales using default options.
///
/// See [`analyze_with`].
#[must_use]
pub fn analyze(scales: &[ColorScale]) -> Vec<ColorCombination> {
    analyze_with(scales, &AnalysisOptions::default())
}

/// Finds every pairing of derived colors whose contrast reaches AA Large (3.1).
///
/// Colors are deduplicated across scales (first occurrence wins), every unordered
/// pair is checked once, and results are sorted by descending ratio. Pairs with
/// equal ratios keep their generation order. Thresholds are evaluated on the exact
/// ratio; the stored ratio is rounded to `options.precision`.
#[must_use]
pub fn analyze_with(scales: &[ColorScale], options: &AnalysisOptions) -> Vec<ColorCombination> {
    let colors = collect_colors(scales);
    let parsed: Vec<RgbColor> = colors
        .iter()
        .map(|info| RgbColor::lenient(&info.hex))
        .collect();

    let mut combinations = Vec::new();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            let ratio = contrast_ratio(parsed[i], parsed[j]);
            if ratio < AA_LARGE_THRESHOLD {
                continue;
            }

            combinations.push(ColorCombination {
                color1: colors[i].clone(),
                color2: colors[j].clone(),
                contrast: options.precision.round(ratio),
                meets_aa_large: true,
                meets_aa: ratio >= AA_THRESHOLD,
                meets_aaa: ratio >= AAA_THRESHOLD,
            });
        }
    }

    combinations.sort_by(|a, b| b.contrast.total_cmp(&a.contrast));

    debug!(
        scales = scales.len(),
        candidates = colors.len(),
        combinations = combinations.len(),
        "contrast analysis complete"
    );

    combinations
}

/// Keeps only combinations at or above `min_level`, preserving order.
#[must_use]
pub fn filter_by_level(
    combinations: &[ColorCombination],
    min_level: WcagLevel,
) -> Vec<ColorCombination> {
    combinations
        .iter()
        .filter(|combo| combo.level() >= min_level)
        .cloned()
        .collect()
}
