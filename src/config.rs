//! Environment-driven configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::indicators::IndicatorCategory;
use crate::signals::SignalThresholds;

/// Deployment environment name, lowercased. Defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|v| v.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Whether an environment name denotes production.
pub fn is_production_env(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub thresholds: SignalThresholds,
    pub default_category: IndicatorCategory,
    /// Number of snapshots in the mock universe.
    pub universe_size: usize,
    pub cache_ttl: Duration,
    /// Fixed seed for reproducible mock data; random when unset.
    pub mock_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: 8080,
            thresholds: SignalThresholds::default(),
            default_category: IndicatorCategory::Trend,
            universe_size: 20,
            cache_ttl: Duration::from_secs(60),
            mock_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep their
    /// defaults and are logged.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT")
            .map(|v| v.to_lowercase())
            .unwrap_or(defaults.environment);

        let thresholds = SignalThresholds {
            score_threshold: parse_or(&lookup, "SCREENER_SCORE_THRESHOLD", defaults.thresholds.score_threshold),
            max_strength: parse_or(&lookup, "SCREENER_MAX_STRENGTH", defaults.thresholds.max_strength),
        };

        Self {
            environment,
            port: parse_or(&lookup, "PORT", defaults.port),
            thresholds,
            default_category: parse_or(&lookup, "SCREENER_DEFAULT_CATEGORY", defaults.default_category),
            universe_size: parse_or(&lookup, "SCREENER_UNIVERSE_SIZE", defaults.universe_size),
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "SCREENER_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )),
            mock_seed: lookup("MOCK_DATA_SEED").and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!(key = "MOCK_DATA_SEED", value = %raw, "Ignoring invalid seed");
                    None
                }
            }),
        }
    }

    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}
