//! Unit tests for the indicator registry

use stocktrix::error::ScreenerError;
use stocktrix::indicators::{
    indicators_for_category, Indicator, IndicatorCategory, IndicatorRegistry, IndicatorSet,
};

use crate::common_fixtures::FixedIndicator;

fn names(category: IndicatorCategory) -> Vec<String> {
    indicators_for_category(category)
        .iter()
        .map(|i| i.name().to_string())
        .collect()
}

#[test]
fn test_every_category_has_three_or_four_indicators() {
    for category in IndicatorRegistry::all_categories() {
        let indicators = indicators_for_category(category);
        assert!(
            (3..=4).contains(&indicators.len()),
            "{} has {} indicators",
            category,
            indicators.len()
        );
        for indicator in indicators {
            assert_eq!(indicator.category(), category);
            assert!(!indicator.description().is_empty());
        }
    }
}

#[test]
fn test_registry_order_is_fixed() {
    assert_eq!(names(IndicatorCategory::Trend), ["SMA/EMA", "MACD", "Supertrend", "ADX"]);
    assert_eq!(names(IndicatorCategory::Momentum), ["RSI", "Stochastic", "CCI", "Momentum"]);
    assert_eq!(
        names(IndicatorCategory::Volatility),
        ["Bollinger Bands", "ATR", "Donchian Channels"]
    );
    assert_eq!(
        names(IndicatorCategory::Volume),
        [
            "Volume Moving Average",
            "On-Balance Volume",
            "Volume Price Trend",
            "Chaikin Money Flow"
        ]
    );
    assert_eq!(
        names(IndicatorCategory::Custom),
        ["Golden/Death Cross", "Price Action Patterns", "52-Week High/Low"]
    );
}

#[test]
fn test_registry_is_stable_across_calls() {
    for category in IndicatorCategory::ALL {
        assert_eq!(names(category), names(category));
        assert_eq!(IndicatorRegistry::catalog(category), IndicatorRegistry::catalog(category));
    }
}

#[test]
fn test_category_parsing_is_case_insensitive() {
    assert_eq!("trend".parse::<IndicatorCategory>().unwrap(), IndicatorCategory::Trend);
    assert_eq!("VOLUME".parse::<IndicatorCategory>().unwrap(), IndicatorCategory::Volume);
    assert_eq!(" Custom ".parse::<IndicatorCategory>().unwrap(), IndicatorCategory::Custom);
}

#[test]
fn test_unknown_category_is_rejected() {
    let err = "Fundamental".parse::<IndicatorCategory>().unwrap_err();
    assert_eq!(err, ScreenerError::InvalidCategory("Fundamental".to_string()));
    assert!("".parse::<IndicatorCategory>().is_err());
}

#[test]
fn test_find_by_name() {
    let rsi = IndicatorRegistry::find("RSI").expect("RSI is registered");
    assert_eq!(rsi.category(), IndicatorCategory::Momentum);
    assert!(IndicatorRegistry::find("Ichimoku").is_none());
}

#[test]
fn test_category_set_matches_registry() {
    let set = IndicatorSet::for_category(IndicatorCategory::Trend);
    assert_eq!(set.len(), 4);
    assert_eq!(set.names(), ["SMA/EMA", "MACD", "Supertrend", "ADX"]);
}

#[test]
fn test_custom_set_rejects_empty_and_duplicates() {
    assert!(matches!(
        IndicatorSet::new(Vec::new()),
        Err(ScreenerError::IndicatorDefinition { .. })
    ));

    let a = FixedIndicator::buy("Same", 1);
    let b = FixedIndicator::short("Same", -1);
    let indicators: Vec<&dyn Indicator> = vec![&a, &b];
    let err = IndicatorSet::new(indicators).err().expect("duplicate names rejected");
    assert_eq!(
        err,
        ScreenerError::IndicatorDefinition {
            indicator: "Same".to_string(),
            reason: "duplicate indicator name in set".to_string(),
        }
    );
}

#[test]
fn test_custom_set_can_mix_registry_indicators() {
    let rsi = IndicatorRegistry::find("RSI").unwrap();
    let extra = FixedIndicator::quiet("Extra", 0);
    let indicators: Vec<&dyn Indicator> = vec![rsi, &extra];
    let set = IndicatorSet::new(indicators).unwrap();
    assert_eq!(set.names(), ["RSI", "Extra"]);
}
