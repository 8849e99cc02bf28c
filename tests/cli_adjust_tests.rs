//! End-to-end tests for `tintscale adjust`.

mod fixtures;
use fixtures::*;

#[test]
fn test_adjust_lighten() {
    let output = run(&["adjust", "#6432C8", "--factor", "0.1"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "#6E37DC");
}

#[test]
fn test_adjust_darken_negative_factor() {
    let output = run(&["adjust", "#6432C8", "--factor", "-0.5"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "#321964");
}

#[test]
fn test_adjust_rgb_format() {
    let output = run(&["adjust", "#6432C8", "--factor", "-1", "--format", "rgb"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "rgb(0, 0, 0)");
}

#[test]
fn test_adjust_factor_out_of_range() {
    let output = run(&["adjust", "#6432C8", "--factor", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("factor"));
}
