//! Data models for colors, shade levels, scales, and contrast results.
//!
//! This module contains the plain data structures used throughout the crate.
//! Models are independent of derivation logic and output formatting.

pub mod combination;
pub mod rgb;
pub mod scale;
pub mod shade;

// Re-export all model types
pub use combination::{ColorCombination, RatioPrecision, WcagLevel};
pub use rgb::RgbColor;
pub use scale::{ColorInfo, ColorScale};
pub use shade::ShadeStep;
