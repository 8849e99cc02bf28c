//! Contrast analysis over realistic scale sets.

use tintscale::models::{ColorScale, RatioPrecision, WcagLevel};
use tintscale::services::contrast::{
    analyze, analyze_with, collect_colors, filter_by_level, get_contrast_ratio, AnalysisOptions,
};

fn scales(colors: &[&str]) -> Vec<ColorScale> {
    ColorScale::from_colors(colors)
}

#[test]
fn test_two_scale_analysis() {
    let combos = analyze(&scales(&["#3B82F6", "#F59E0B"]));

    assert_eq!(combos.len(), 59);
    assert_eq!(combos[0].color1.hex, "#1E417B");
    assert_eq!(combos[0].color2.hex, "#FFFAF3");
    assert!((combos[0].contrast - 9.64).abs() < 1e-9);
    assert_eq!(combos[0].level(), WcagLevel::Aaa);

    let count = |level: WcagLevel| combos.iter().filter(|c| c.level() == level).count();
    assert_eq!(count(WcagLevel::Aaa), 7);
    assert_eq!(count(WcagLevel::Aa), 24);
    assert_eq!(count(WcagLevel::AaLarge), 28);
}

#[test]
fn test_every_pair_is_unique_and_ordered() {
    let combos = analyze(&scales(&["#3B82F6", "#F59E0B", "#10B981"]));

    let mut seen = std::collections::HashSet::new();
    for combo in &combos {
        assert_ne!(combo.color1.hex, combo.color2.hex);
        let mut key = [combo.color1.hex.clone(), combo.color2.hex.clone()];
        key.sort();
        assert!(seen.insert(key), "pair reported twice");
    }
    assert!(combos.windows(2).all(|w| w[0].contrast >= w[1].contrast));
}

#[test]
fn test_flags_agree_with_exact_ratio() {
    let combos = analyze(&scales(&["#3B82F6", "#EF4444", "#8B5CF6"]));

    for combo in &combos {
        let exact = get_contrast_ratio(&combo.color1.hex, &combo.color2.hex);
        assert!(exact >= 3.1);
        assert_eq!(combo.meets_aa, exact >= 4.5);
        assert_eq!(combo.meets_aaa, exact >= 7.0);
        assert!(combo.meets_aa_large);
    }
}

#[test]
fn test_first_occurrence_wins_across_scales() {
    let colors = collect_colors(&scales(&["#000000", "#000000", "#FFFFFF"]));

    let black = colors.iter().find(|c| c.hex == "#000000").unwrap();
    assert_eq!(black.scale_index, 0);
    assert_eq!(black.scale_id, 1);
    assert!(colors.iter().all(|c| c.scale_index != 1));
}

#[test]
fn test_precision_option() {
    let options = AnalysisOptions {
        precision: RatioPrecision::One,
    };
    let combos = analyze_with(&scales(&["#3B82F6"]), &options);

    assert_eq!(combos.len(), 15);
    assert!((combos[0].contrast - 9.5).abs() < 1e-9);
    for combo in &combos {
        let tenths = combo.contrast * 10.0;
        assert!((tenths.round() - tenths).abs() < 1e-9);
    }
}

#[test]
fn test_filter_by_level_keeps_order() {
    let combos = analyze(&scales(&["#3B82F6", "#F59E0B"]));
    let aa = filter_by_level(&combos, WcagLevel::Aa);

    assert_eq!(aa.len(), 31);
    assert!(aa.iter().all(|c| c.meets_aa));
    assert_eq!(aa[0], combos[0]);
    let large_and_up = filter_by_level(&combos, WcagLevel::AaLarge);
    assert_eq!(large_and_up.len(), combos.len());
}

#[test]
fn test_degenerate_inputs() {
    assert!(analyze(&[]).is_empty());
    assert_eq!(analyze(&scales(&["#FFFFFF"])).len(), 1);
    assert_eq!(analyze(&scales(&["bogus"])).len(), 9);
}
