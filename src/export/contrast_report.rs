//! Contrast table rendering for analysis results.
//!
//! Produces either an aligned plain-text table for terminals or a markdown table
//! for documentation, one row per accessible combination.

use std::fmt::Write as _;

use crate::models::{ColorCombination, ColorInfo, RatioPrecision};

/// Message shown when an analysis yields nothing.
pub const NO_COMBINATIONS_MESSAGE: &str = "No accessible color combinations found. \
Try adding more contrasting colors or additional color scales.";

const HEADERS: [&str; 5] = [
    "Foreground",
    "Background",
    "Contrast",
    "Level",
    "Min Text Size",
];

/// Formats a ratio as `N.NN:1` with the given precision.
#[must_use]
pub fn format_ratio(ratio: f64, precision: RatioPrecision) -> String {
    format!("{:.*}:1", precision.places(), ratio)
}

fn color_cell(info: &ColorInfo) -> String {
    format!("{} ({})", info.token(), info.hex)
}

fn rows(combinations: &[ColorCombination], precision: RatioPrecision) -> Vec<[String; 5]> {
    combinations
        .iter()
        .map(|combo| {
            [
                color_cell(&combo.color1),
                color_cell(&combo.color2),
                format_ratio(combo.contrast, precision),
                combo.level().label().to_string(),
                combo.min_text_size().to_string(),
            ]
        })
        .collect()
}

fn summary(count: usize) -> String {
    format!("Showing all {count} combinations that meet minimum accessibility standards (≥3:1)")
}

/// Renders combinations as an aligned plain-text table.
#[must_use]
pub fn render_contrast_table(
    combinations: &[ColorCombination],
    precision: RatioPrecision,
) -> String {
    if combinations.is_empty() {
        return format!("{NO_COMBINATIONS_MESSAGE}\n");
    }

    let rows = rows(combinations, precision);
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    let _ = writeln!(output, "{}\n", summary(combinations.len()));
    let _ = writeln!(output, "{}", format_line(&HEADERS));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(output, "{}", rule.join("  "));

    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(output, "{}", format_line(&cells));
    }

    output
}

/// Renders combinations as a markdown section with a table.
#[must_use]
pub fn render_contrast_markdown(
    combinations: &[ColorCombination],
    precision: RatioPrecision,
) -> String {
    let mut output = String::from("## Accessible Color Combinations\n\n");

    if combinations.is_empty() {
        let _ = writeln!(output, "{NO_COMBINATIONS_MESSAGE}");
        return output;
    }

    let _ = writeln!(output, "{}\n", summary(combinations.len()));
    let _ = writeln!(output, "| {} |", HEADERS.join(" | "));
    let _ = writeln!(output, "|{}", "---|".repeat(HEADERS.len()));

    for row in rows(combinations, precision) {
        let _ = writeln!(output, "| {} |", row.join(" | "));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorScale;
    use crate::services::contrast::analyze;

    fn sample() -> Vec<ColorCombination> {
        analyze(&ColorScale::from_colors(&["#3B82F6", "#F59E0B"]))
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(9.6, RatioPrecision::Two), "9.60:1");
        assert_eq!(format_ratio(21.0, RatioPrecision::One), "21.0:1");
    }

    #[test]
    fn test_table_first_row() {
        let table = render_contrast_table(&sample(), RatioPrecision::Two);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Showing all 59 combinations"));
        assert!(lines[2].starts_with("Foreground"));
        assert!(lines[3].starts_with("---"));
        assert!(lines[4].contains("color-1-900 (#1E417B)"));
        assert!(lines[4].contains("color-2-50 (#FFFAF3)"));
        assert!(lines[4].contains("9.64:1"));
        assert!(lines[4].contains("AAA"));
        assert!(lines[4].ends_with("Any size"));
        assert_eq!(lines.len(), 4 + 59);
    }

    #[test]
    fn test_table_columns_align() {
        let table = render_contrast_table(&sample(), RatioPrecision::Two);
        let header = table.lines().nth(2).unwrap();
        let first = table.lines().nth(4).unwrap();
        assert_eq!(header.find("Contrast"), first.find("9.64:1"));
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(
            render_contrast_table(&[], RatioPrecision::Two),
            format!("{NO_COMBINATIONS_MESSAGE}\n")
        );
    }

    #[test]
    fn test_markdown() {
        let markdown = render_contrast_markdown(&sample(), RatioPrecision::Two);
        assert!(markdown.starts_with("## Accessible Color Combinations\n\n"));
        let header = "| Foreground | Background | Contrast | Level | Min Text Size |";
        let top_row = "| color-1-900 (#1E417B) | color-2-50 (#FFFAF3) | 9.64:1 | AAA | Any size |";
        assert!(markdown.contains(header));
        assert!(markdown.contains("|---|---|---|---|---|"));
        assert!(markdown.contains(top_row));
        assert!(markdown.contains("| AA Large | 18px / 14pt |"));
    }

    #[test]
    fn test_markdown_empty() {
        let markdown = render_contrast_markdown(&[], RatioPrecision::Two);
        assert!(markdown.contains(NO_COMBINATIONS_MESSAGE));
        assert!(!markdown.contains('|'));
    }
}
