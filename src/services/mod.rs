//! Service layer for color derivation and contrast analysis.
//!
//! Every function here is pure: inputs are borrowed snapshots and results are freshly
//! allocated, so callers may recompute as often as they like.

pub mod contrast;
pub mod shades;

// Re-export commonly used types and functions
pub use contrast::{analyze, analyze_with, contrast_ratio, get_contrast_ratio, AnalysisOptions};
pub use shades::{generate_scale, generate_shades, mix, mix_percentage};
