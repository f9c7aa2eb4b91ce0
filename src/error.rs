//! Screening error taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenerError {
    /// Category text outside the five known categories.
    #[error("invalid screener category: {0:?}")]
    InvalidCategory(String),

    /// A required indicator value is absent or non-numeric.
    #[error("malformed snapshot for {symbol}: missing or non-numeric field `{field}`")]
    MalformedSnapshot { symbol: String, field: &'static str },

    /// A registered rule or indicator set is misconfigured.
    #[error("indicator definition error in {indicator}: {reason}")]
    IndicatorDefinition { indicator: String, reason: String },
}

impl ScreenerError {
    pub fn malformed(symbol: &str, field: &'static str) -> Self {
        Self::MalformedSnapshot {
            symbol: symbol.to_string(),
            field,
        }
    }

    pub fn definition(indicator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IndicatorDefinition {
            indicator: indicator.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
