use std::collections::HashSet;
use std::ops::Deref;

use super::{Indicator, IndicatorCategory, IndicatorRegistry};
use crate::error::{Result, ScreenerError};

/// Ordered, validated indicator collection handed to the screener.
///
/// Registry sets borrow the static catalog; custom sets may mix in any
/// [`Indicator`] the caller owns.
#[derive(Clone)]
pub struct IndicatorSet<'a> {
    indicators: Vec<&'a dyn Indicator>,
}

impl<'a> IndicatorSet<'a> {
    /// Build a custom set. Rejects empty sets and duplicate names, since
    /// fired-indicator labels must identify a single rule.
    pub fn new(indicators: Vec<&'a dyn Indicator>) -> Result<Self> {
        if indicators.is_empty() {
            return Err(ScreenerError::definition(
                "indicator set",
                "at least one indicator is required",
            ));
        }

        let mut seen = HashSet::new();
        for indicator in &indicators {
            if indicator.name().trim().is_empty() {
                return Err(ScreenerError::definition(
                    "indicator set",
                    "indicator names must not be blank",
                ));
            }
            if !seen.insert(indicator.name()) {
                return Err(ScreenerError::definition(
                    indicator.name(),
                    "duplicate indicator name in set",
                ));
            }
        }

        Ok(Self { indicators })
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.indicators.iter().map(|i| i.name()).collect()
    }
}

impl IndicatorSet<'static> {
    pub fn for_category(category: IndicatorCategory) -> Self {
        Self {
            indicators: IndicatorRegistry::indicators_for_category(category).to_vec(),
        }
    }
}

impl<'a> Deref for IndicatorSet<'a> {
    type Target = [&'a dyn Indicator];

    fn deref(&self) -> &Self::Target {
        &self.indicators
    }
}
