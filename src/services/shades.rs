//! Tint/shade scale derivation.
//!
//! A scale is built by mixing the base color toward white for the light levels
//! (50-400) and toward black for the dark levels (600-900). Level 500 is the base
//! color itself. Tints reach further (95% at level 50) than shades (50% at level 900).

// Channel math stays within 0.0-255.0 before the cast back to u8
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::models::rgb::{BLACK, WHITE};
use crate::models::{RgbColor, ShadeStep};

/// Mix percentage toward white at level 50.
pub const MAX_TINT_PERCENT: f64 = 95.0;

/// Mix percentage toward black at level 900.
pub const MAX_SHADE_PERCENT: f64 = 50.0;

/// Percentage (0-100) of the mix target blended into the base color at `step`.
///
/// Linear from 95 at level 50 down to 0 at level 500, then linear from 0 up to 50
/// at level 900.
///
/// # Examples
///
/// ```
/// use tintscale::services::shades::mix_percentage;
///
/// assert_eq!(mix_percentage(50), 95.0);
/// assert_eq!(mix_percentage(500), 0.0);
/// assert_eq!(mix_percentage(900), 50.0);
/// ```
#[must_use]
pub fn mix_percentage(step: u16) -> f64 {
    let step = f64::from(step);
    if step <= 500.0 {
        MAX_TINT_PERCENT - ((step - 50.0) / 450.0) * MAX_TINT_PERCENT
    } else {
        ((step - 500.0) / 400.0) * MAX_SHADE_PERCENT
    }
}

/// Linearly interpolates each channel from `base` toward `target` by `weight` (0.0-1.0).
#[must_use]
pub fn mix(base: RgbColor, target: RgbColor, weight: f64) -> RgbColor {
    let blend = |c: u8, t: u8| -> u8 {
        (f64::from(c) * (1.0 - weight) + f64::from(t) * weight).round() as u8
    };

    RgbColor::new(
        blend(base.r, target.r),
        blend(base.g, target.g),
        blend(base.b, target.b),
    )
}

/// Color at one level of the scale derived from `base`.
#[must_use]
pub fn shade_of(base: RgbColor, step: ShadeStep) -> RgbColor {
    let target = if step.is_tint() { WHITE } else { BLACK };
    mix(base, target, mix_percentage(step.value()) / 100.0)
}

/// Derives all ten levels for `base`, lightest first.
#[must_use]
pub fn generate_scale(base: RgbColor) -> Vec<(ShadeStep, RgbColor)> {
    ShadeStep::ALL
        .into_iter()
        .map(|step| (step, shade_of(base, step)))
        .collect()
}

/// Derives the ten uppercase hex strings for a base hex color, lightest first.
///
/// Malformed input is read as black rather than rejected.
///
/// # Examples
///
/// ```
/// use tintscale::services::shades::generate_shades;
///
/// let shades = generate_shades("#3b82f6");
/// assert_eq!(shades.len(), 10);
/// assert_eq!(shades[5], "#3B82F6");
/// ```
#[must_use]
pub fn generate_shades(base_hex: &str) -> Vec<String> {
    generate_scale(RgbColor::lenient(base_hex))
        .into_iter()
        .map(|(_, color)| color.to_hex())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_percentage_boundaries() {
        assert_eq!(mix_percentage(50), 95.0);
        assert_eq!(mix_percentage(500), 0.0);
        assert_eq!(mix_percentage(900), 50.0);
        assert!((mix_percentage(275) - 47.5).abs() < 1e-9);
        assert!((mix_percentage(700) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_mix_percentage_monotonic() {
        let tints: Vec<f64> = ShadeStep::ALL
            .iter()
            .filter(|s| s.value() <= 500)
            .map(|s| mix_percentage(s.value()))
            .collect();
        assert!(tints.windows(2).all(|w| w[0] > w[1]));

        let shades: Vec<f64> = ShadeStep::ALL
            .iter()
            .filter(|s| s.value() >= 500)
            .map(|s| mix_percentage(s.value()))
            .collect();
        assert!(shades.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mix() {
        let base = RgbColor::new(100, 150, 200);
        assert_eq!(mix(base, WHITE, 0.0), base);
        assert_eq!(mix(base, WHITE, 1.0), WHITE);
        assert_eq!(mix(base, BLACK, 0.5), RgbColor::new(50, 75, 100));
        let near_black = RgbColor::new(1, 1, 1);
        assert_eq!(mix(near_black, BLACK, 0.5), near_black);
    }

    #[test]
    fn test_generate_shades_blue() {
        let shades = generate_shades("#3B82F6");
        assert_eq!(
            shades,
            vec![
                "#F5F9FF", "#E1ECFE", "#B7D1FC", "#8EB7FA", "#649CF8", "#3B82F6", "#3472D7",
                "#2C62B9", "#25519A", "#1E417B",
            ]
        );
    }

    #[test]
    fn test_generate_shades_amber() {
        let shades = generate_shades("#f59e0b");
        assert_eq!(shades[0], "#FFFAF3");
        assert_eq!(shades[5], "#F59E0B");
        assert_eq!(shades[9], "#7B4F06");
    }

    #[test]
    fn test_generate_shades_deterministic() {
        assert_eq!(generate_shades("#3b82f6"), generate_shades("#3b82f6"));
    }

    #[test]
    fn test_generate_shades_black_collapses() {
        let shades = generate_shades("#000000");
        assert_eq!(shades[0], "#F2F2F2");
        assert!(shades[5..].iter().all(|hex| hex == "#000000"));
    }

    #[test]
    fn test_generate_shades_malformed_reads_as_black() {
        assert_eq!(generate_shades("#12345"), generate_shades("#000000"));
        assert_eq!(generate_shades("not a color").len(), 10);
    }

    #[test]
    fn test_generate_scale_pairs_steps() {
        let scale = generate_scale(RgbColor::new(59, 130, 246));
        let steps: Vec<ShadeStep> = scale.iter().map(|(step, _)| *step).collect();
        assert_eq!(steps, ShadeStep::ALL.to_vec());
        assert_eq!(scale[5].1, RgbColor::new(59, 130, 246));
    }
}
