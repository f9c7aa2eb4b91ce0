//! Unit tests for signal resolution and strength

use stocktrix::models::FinalSignal;
use stocktrix::signals::{calculate_strength, resolve_signal, SignalThresholds};

#[test]
fn test_buy_needs_score_above_threshold_and_buy_majority() {
    let t = SignalThresholds::default();
    assert_eq!(resolve_signal(4, 2, 1, &t), FinalSignal::Buy);
    assert_eq!(resolve_signal(3, 2, 1, &t), FinalSignal::Wait);
    assert_eq!(resolve_signal(6, 1, 1, &t), FinalSignal::Wait);
    assert_eq!(resolve_signal(6, 0, 0, &t), FinalSignal::Wait);
}

#[test]
fn test_short_mirrors_buy() {
    let t = SignalThresholds::default();
    assert_eq!(resolve_signal(-4, 0, 2, &t), FinalSignal::Short);
    assert_eq!(resolve_signal(-3, 0, 2, &t), FinalSignal::Wait);
    assert_eq!(resolve_signal(-8, 2, 2, &t), FinalSignal::Wait);
}

#[test]
fn test_custom_threshold() {
    let t = SignalThresholds {
        score_threshold: 1,
        max_strength: 10,
    };
    assert_eq!(resolve_signal(2, 1, 0, &t), FinalSignal::Buy);
    assert_eq!(resolve_signal(-2, 0, 1, &t), FinalSignal::Short);
}

#[test]
fn test_strength_formula_and_cap() {
    let t = SignalThresholds::default();
    assert_eq!(calculate_strength(0, 0, 0, &t), 0);
    assert_eq!(calculate_strength(4, 2, 1, &t), 6);
    assert_eq!(calculate_strength(-5, 0, 3, &t), 8);
    assert_eq!(calculate_strength(8, 4, 0, &t), 10);
    assert_eq!(calculate_strength(i32::MIN, u32::MAX, 0, &t), 10);
}

#[test]
fn test_strength_uses_larger_side() {
    let t = SignalThresholds::default();
    assert_eq!(calculate_strength(1, 1, 3, &t), 4);
}
