//! End-to-end tests for `tintscale shades`.

mod fixtures;
use fixtures::*;

const BLUE_SHADES: [&str; 10] = [
    "#F5F9FF", "#E1ECFE", "#B7D1FC", "#8EB7FA", "#649CF8", "#3B82F6", "#3472D7", "#2C62B9",
    "#25519A", "#1E417B",
];

#[test]
fn test_shades_json_output() {
    let result = run_json(&["shades", "#3b82f6", "--json"]);

    let scales = result.as_array().expect("Should be an array of scales");
    assert_eq!(scales.len(), 1);
    assert_eq!(scales[0]["id"], 1);
    assert_eq!(scales[0]["color"], "#3B82F6");

    let shades = scales[0]["shades"].as_array().unwrap();
    let steps: Vec<u64> = shades
        .iter()
        .map(|s| s["shade"].as_u64().unwrap())
        .collect();
    let expected = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
    assert_eq!(steps, expected);

    let values: Vec<&str> = shades
        .iter()
        .map(|s| s["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, BLUE_SHADES);
}

#[test]
fn test_shades_multiple_colors_numbered_in_order() {
    let result = run_json(&["shades", "3b82f6", "#F59E0B", "--json"]);

    let scales = result.as_array().unwrap();
    assert_eq!(scales.len(), 2);
    assert_eq!(scales[1]["id"], 2);
    assert_eq!(scales[1]["color"], "#F59E0B");
    assert_eq!(scales[1]["shades"][0]["value"], "#FFFAF3");
    assert_eq!(scales[1]["shades"][9]["value"], "#7B4F06");
}

#[test]
fn test_shades_hsl_format() {
    let result = run_json(&["shades", "#3B82F6", "--format", "hsl", "--json"]);

    let shades = &result[0]["shades"];
    assert_eq!(shades[0]["value"], "hsla(216, 100%, 98%, 1)");
    assert_eq!(shades[5]["value"], "hsla(217, 91%, 60%, 1)");
    assert_eq!(shades[9]["value"], "hsla(217, 61%, 30%, 1)");
}

#[test]
fn test_shades_rgb_format() {
    let result = run_json(&["shades", "#000", "-f", "rgb", "--json"]);

    let shades = &result[0]["shades"];
    assert_eq!(shades[0]["value"], "rgb(242, 242, 242)");
    assert_eq!(shades[9]["value"], "rgb(0, 0, 0)");
}

#[test]
fn test_shades_human_readable() {
    let output = run(&["shades", "#3B82F6"]);
    assert_success(&output);

    let stdout = stdout(&output);
    assert!(stdout.contains("Scale 1 (#3B82F6)"), "stdout: {stdout}");
    assert!(stdout.contains("   50  #F5F9FF"), "stdout: {stdout}");
    assert!(stdout.contains("  900  #1E417B"), "stdout: {stdout}");
}

#[test]
fn test_shades_defaults_to_configured_color() {
    let result = run_json(&["shades", "--json"]);

    assert_eq!(result[0]["color"], "#3B82F6");
    assert_eq!(result[0]["shades"][5]["value"], "#3B82F6");
}

#[test]
fn test_shades_invalid_color() {
    let output = run(&["shades", "#12345g"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_shades_invalid_format() {
    let output = run(&["shades", "#3B82F6", "--format", "cmyk"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cmyk"));
}

#[test]
fn test_shades_input_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let input = write_scales_file(temp_dir.path(), &[(4, "#f59e0b"), (9, "#3b82f6")]);

    let output = isolated_command(
        &["shades", "--input", input.to_str().unwrap(), "--json"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_success(&output);

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result[0]["id"], 4);
    assert_eq!(result[0]["color"], "#F59E0B");
    assert_eq!(result[1]["id"], 9);
}
