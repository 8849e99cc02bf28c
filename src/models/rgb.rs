//! RGB color handling: hex parsing, hex/HSL formatting, and WCAG luminance math.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Strict `#RRGGBB` pattern used by the permissive parser.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
        .expect("hex color pattern is valid")
});

/// Normalized channel value below which sRGB is treated as linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Pure white, the mix target for tints.
pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

/// Pure black, the mix target for shades.
pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string, rejecting malformed input.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" (any case).
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3b82f6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    ///
    /// let color = RgbColor::from_hex("fff").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 255, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Only hex digits 0-9 and A-F are allowed");
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB) or 3 (RGB)"
            ),
        };

        let (r, g, b) = hex_to_rgb(&expanded);
        Ok(Self::new(r, g, b))
    }

    /// Parses a hex string, falling back to black when it is malformed.
    ///
    /// Used by the derivation functions so that a half-typed value never aborts a recompute.
    #[must_use]
    pub fn lenient(hex: &str) -> Self {
        let (r, g, b) = hex_to_rgb(hex);
        Self::new(r, g, b)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as `rgb(R, G, B)`.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-1.0
    /// - `l` (Lightness): 0.0-1.0
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Formats the color as `hsla(H, S%, L%, 1)` with integer components.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hsla_string(), "hsla(0, 100%, 50%, 1)");
    /// ```
    #[must_use]
    pub fn to_hsla_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        format!(
            "hsla({}, {}%, {}%, 1)",
            h.round(),
            (s * 100.0).round(),
            (l * 100.0).round()
        )
    }

    /// WCAG relative luminance of this color (0.0 for black, 1.0 for white).
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    /// Lightens (positive factor) or darkens (negative factor) every channel proportionally.
    ///
    /// Each channel becomes `c + round(c * factor)`, clamped to 0-255. The factor is
    /// clamped to -1.0..=1.0, so black stays black no matter how far it is lightened.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::models::RgbColor;
    ///
    /// let color = RgbColor::new(100, 50, 200);
    /// assert_eq!(color.lighten_darken(0.5), RgbColor::new(150, 75, 255));
    /// assert_eq!(color.lighten_darken(-1.0), RgbColor::new(0, 0, 0));
    /// ```
    #[must_use]
    pub fn lighten_darken(&self, factor: f64) -> Self {
        let factor = factor.clamp(-1.0, 1.0);
        // Delta rounds half-up.
        let adjust = |channel: u8| -> u8 {
            let c = f64::from(channel);
            (c + (c * factor + 0.5).floor()).clamp(0.0, 255.0) as u8
        };

        Self {
            r: adjust(self.r),
            g: adjust(self.g),
            b: adjust(self.b),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        WHITE
    }
}

/// Parses a strict 6-digit hex string (optional `#`, any case) into channels.
///
/// Anything that does not match the pattern yields `(0, 0, 0)` instead of an error.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let Some(caps) = HEX_PATTERN.captures(hex) else {
        return (0, 0, 0);
    };

    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
    (channel(1), channel(2), channel(3))
}

/// Formats channels as uppercase `#RRGGBB`, rounding each to the nearest integer.
///
/// Channels are not clamped; callers must keep them within 0-255.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    RgbColor::new(r.round() as u8, g.round() as u8, b.round() as u8).to_hex()
}

/// Converts a hex string to `hsla(H, S%, L%, 1)` notation (malformed input reads as black).
#[must_use]
pub fn hex_to_hsl(hex: &str) -> String {
    RgbColor::lenient(hex).to_hsla_string()
}

/// sRGB transfer function: maps a 0-255 channel to linear light in 0.0-1.0.
#[must_use]
pub fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance from 0-255 channels.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}
