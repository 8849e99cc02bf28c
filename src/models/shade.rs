//! The ten fixed shade levels of a derived color scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten shade levels, ordered lightest (50) to darkest (900).
///
/// Serializes as its bare numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ShadeStep {
    /// Level 50, the lightest tint
    S50,
    /// Level 100
    S100,
    /// Level 200
    S200,
    /// Level 300
    S300,
    /// Level 400
    S400,
    /// Level 500, the base color itself
    S500,
    /// Level 600
    S600,
    /// Level 700
    S700,
    /// Level 800
    S800,
    /// Level 900, the darkest shade
    S900,
}

impl ShadeStep {
    /// All levels in ascending order.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric level (50, 100, ..., 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Returns true for levels mixed toward white (below 500).
    #[must_use]
    pub const fn is_tint(self) -> bool {
        self.value() < 500
    }
}

impl From<ShadeStep> for u16 {
    fn from(step: ShadeStep) -> Self {
        step.value()
    }
}

impl TryFrom<u16> for ShadeStep {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|step| step.value() == value)
            .ok_or_else(|| format!("Invalid shade level {value}. Expected one of 50, 100-900"))
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
