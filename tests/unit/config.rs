//! Unit tests for environment configuration

use std::collections::HashMap;
use std::time::Duration;

use stocktrix::config::Config;
use stocktrix::indicators::IndicatorCategory;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 8080);
    assert_eq!(config.thresholds.score_threshold, 3);
    assert_eq!(config.thresholds.max_strength, 10);
    assert_eq!(config.default_category, IndicatorCategory::Trend);
    assert!(!config.is_production());
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("ENVIRONMENT", "Production"),
        ("PORT", "9000"),
        ("SCREENER_SCORE_THRESHOLD", "5"),
        ("SCREENER_MAX_STRENGTH", "20"),
        ("SCREENER_DEFAULT_CATEGORY", "volatility"),
        ("SCREENER_UNIVERSE_SIZE", "12"),
        ("SCREENER_CACHE_TTL_SECS", "0"),
        ("MOCK_DATA_SEED", "42"),
    ]);

    assert!(config.is_production());
    assert_eq!(config.port, 9000);
    assert_eq!(config.thresholds.score_threshold, 5);
    assert_eq!(config.thresholds.max_strength, 20);
    assert_eq!(config.default_category, IndicatorCategory::Volatility);
    assert_eq!(config.universe_size, 12);
    assert_eq!(config.cache_ttl, Duration::ZERO);
    assert_eq!(config.mock_seed, Some(42));
}

#[test]
fn test_invalid_values_fall_back() {
    let config = config_from(&[
        ("PORT", "eighty"),
        ("SCREENER_DEFAULT_CATEGORY", "Fundamental"),
        ("MOCK_DATA_SEED", "-1"),
    ]);

    assert_eq!(config.port, 8080);
    assert_eq!(config.default_category, IndicatorCategory::Trend);
    assert_eq!(config.mock_seed, None);
}

#[test]
fn test_production_environment_names() {
    use stocktrix::config::is_production_env;

    assert!(is_production_env("production"));
    assert!(is_production_env("prod"));
    assert!(!is_production_env("sandbox"));
    assert!(!is_production_env("staging"));
    assert!(config_from(&[("ENVIRONMENT", "PROD")]).is_production());
}
