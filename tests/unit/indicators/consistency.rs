//! Cross-rule invariants over generated market data

use stocktrix::indicators::{IndicatorCategory, IndicatorRegistry};
use stocktrix::services::MockMarketData;

#[test]
fn test_no_rule_fires_both_directions() {
    for seed in [1, 7, 42, 2024] {
        for snapshot in MockMarketData::seeded(seed).generate(25) {
            for category in IndicatorCategory::ALL {
                for indicator in IndicatorRegistry::indicators_for_category(category) {
                    let buy = indicator.buy_fires(&snapshot).unwrap();
                    let short = indicator.short_fires(&snapshot).unwrap();
                    assert!(
                        !(buy && short),
                        "{} fired both ways on {}",
                        indicator.name(),
                        snapshot.symbol
                    );
                }
            }
        }
    }
}

#[test]
fn test_score_sign_agrees_with_firing_side() {
    for seed in [3, 11, 99] {
        for snapshot in MockMarketData::seeded(seed).generate(25) {
            for category in IndicatorCategory::ALL {
                for indicator in IndicatorRegistry::indicators_for_category(category) {
                    let score = indicator.score(&snapshot).unwrap();
                    if indicator.buy_fires(&snapshot).unwrap() {
                        assert!(score > 0, "{} buy with score {}", indicator.name(), score);
                    }
                    if indicator.short_fires(&snapshot).unwrap() {
                        assert!(score < 0, "{} short with score {}", indicator.name(), score);
                    }
                    assert!((-3..=3).contains(&score));
                }
            }
        }
    }
}
