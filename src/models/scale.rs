//! User-facing color scale entries and the per-color records derived from them.

use serde::{Deserialize, Serialize};

use super::ShadeStep;

/// A user-added scale: a display id plus the base color the scale is derived from.
///
/// The color is kept as the raw string the user typed; derivation reads it leniently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Stable identifier used for display grouping
    pub id: u32,
    /// Base color as a hex string (e.g., "#3b82f6")
    pub color: String,
}

impl ColorScale {
    /// Creates a new scale entry.
    #[must_use]
    pub fn new(id: u32, color: impl Into<String>) -> Self {
        Self {
            id,
            color: color.into(),
        }
    }

    /// Builds scales from a list of base colors, numbering ids from 1.
    #[must_use]
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Vec<Self> {
        colors
            .iter()
            .zip(1u32..)
            .map(|(color, id)| Self::new(id, color.as_ref()))
            .collect()
    }
}

/// One unique color of an analysis, attributed to the first scale that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// Shade level within its scale
    pub shade: ShadeStep,
    /// Id of the attributed scale
    pub scale_id: u32,
    /// Position of the attributed scale in the input list (0-based)
    pub scale_index: usize,
}

impl ColorInfo {
    /// Display token such as `color-1-500` (scale position is 1-based).
    #[must_use]
    pub fn token(&self) -> String {
        format!("color-{}-{}", self.scale_index + 1, self.shade)
    }
}
