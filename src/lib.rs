//! TintScale Library
//!
//! Derives ten-step tint/shade scales from base colors and enumerates the
//! color pairings across those scales that meet WCAG contrast thresholds.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
