//! Export functionality for derived palettes.
//!
//! This module turns scales and analysis results into text meant for other tools:
//! theme configuration snippets and contrast tables.

pub mod contrast_report;
pub mod theme;

pub use contrast_report::{render_contrast_markdown, render_contrast_table};
pub use theme::{render_theme, ColorNotation, ThemeTemplate};
