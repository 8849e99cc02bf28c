//! Accessible color pairings produced by contrast analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ColorInfo;

/// WCAG 2.x text-contrast conformance level, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below every threshold
    Fail,
    /// Large text only (18px / 14pt and up)
    AaLarge,
    /// Normal text
    Aa,
    /// Enhanced contrast, any text size
    Aaa,
}

impl WcagLevel {
    /// Badge label as shown in contrast tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Smallest text size this level is good for.
    #[must_use]
    pub const fn min_text_size(self) -> &'static str {
        match self {
            Self::Fail => "N/A",
            Self::AaLarge => "18px / 14pt",
            Self::Aa => "16px / 12pt",
            Self::Aaa => "Any size",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WcagLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "aa-large" => Ok(Self::AaLarge),
            "aa" => Ok(Self::Aa),
            "aaa" => Ok(Self::Aaa),
            "fail" => Ok(Self::Fail),
            _ => anyhow::bail!("Invalid WCAG level '{s}'. Must be 'aa-large', 'aa', or 'aaa'"),
        }
    }
}

/// Number of decimal places kept on reported contrast ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RatioPrecision {
    /// One decimal place (e.g., 4.5)
    One,
    /// Two decimal places (e.g., 4.54)
    #[default]
    Two,
}

impl RatioPrecision {
    /// Rounds a ratio to this precision.
    #[must_use]
    pub fn round(self, ratio: f64) -> f64 {
        let factor = match self {
            Self::One => 10.0,
            Self::Two => 100.0,
        };
        (ratio * factor).round() / factor
    }

    /// Number of decimal places.
    #[must_use]
    pub const fn places(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl From<RatioPrecision> for u8 {
    fn from(precision: RatioPrecision) -> Self {
        match precision {
            RatioPrecision::One => 1,
            RatioPrecision::Two => 2,
        }
    }
}

impl TryFrom<u8> for RatioPrecision {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(format!("Invalid ratio precision {value}. Must be 1 or 2")),
        }
    }
}

/// An unordered pair of colors whose contrast meets at least AA Large.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCombination {
    /// Earlier color in candidate order (used as foreground in previews)
    pub color1: ColorInfo,
    /// Later color in candidate order (used as background in previews)
    pub color2: ColorInfo,
    /// Contrast ratio, rounded to the analysis precision
    pub contrast: f64,
    /// Ratio >= 3.1
    #[serde(rename = "meetsAALarge")]
    pub meets_aa_large: bool,
    /// Ratio >= 4.5
    #[serde(rename = "meetsAA")]
    pub meets_aa: bool,
    /// Ratio >= 7.0
    #[serde(rename = "meetsAAA")]
    pub meets_aaa: bool,
}

impl ColorCombination {
    /// Highest level this pairing satisfies.
    #[must_use]
    pub const fn level(&self) -> WcagLevel {
        if self.meets_aaa {
            WcagLevel::Aaa
        } else if self.meets_aa {
            WcagLevel::Aa
        } else if self.meets_aa_large {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    /// Smallest text size this pairing is good for.
    #[must_use]
    pub const fn min_text_size(&self) -> &'static str {
        self.level().min_text_size()
    }
}
