//! Indicator registry and category catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::custom::{FiftyTwoWeekExtremes, GoldenDeathCross, PriceActionPatterns};
use super::momentum::{CciExtremes, PriceMomentum, RsiZones, StochasticReversal};
use super::trend::{AdxTrendStrength, MacdCrossover, MovingAverageAlignment, Supertrend};
use super::volatility::{AtrExpansion, BollingerBands, DonchianBreakout};
use super::volume::{ChaikinMoneyFlow, OnBalanceVolume, VolumePriceTrend, VolumeSurge};
use super::Indicator;
use crate::error::ScreenerError;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
    Custom,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 5] = [
        IndicatorCategory::Trend,
        IndicatorCategory::Momentum,
        IndicatorCategory::Volatility,
        IndicatorCategory::Volume,
        IndicatorCategory::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorCategory::Trend => "Trend",
            IndicatorCategory::Momentum => "Momentum",
            IndicatorCategory::Volatility => "Volatility",
            IndicatorCategory::Volume => "Volume",
            IndicatorCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for IndicatorCategory {
    type Err = ScreenerError;

    /// Case-insensitive; anything outside the five categories is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScreenerError::InvalidCategory(s.to_string()))
    }
}

static TREND_INDICATORS: [&dyn Indicator; 4] = [
    &MovingAverageAlignment,
    &MacdCrossover,
    &Supertrend,
    &AdxTrendStrength::STANDARD,
];

static MOMENTUM_INDICATORS: [&dyn Indicator; 4] = [
    &RsiZones::STANDARD,
    &StochasticReversal::STANDARD,
    &CciExtremes::STANDARD,
    &PriceMomentum,
];

static VOLATILITY_INDICATORS: [&dyn Indicator; 3] = [
    &BollingerBands,
    &AtrExpansion::STANDARD,
    &DonchianBreakout,
];

static VOLUME_INDICATORS: [&dyn Indicator; 4] = [
    &VolumeSurge::STANDARD,
    &OnBalanceVolume,
    &VolumePriceTrend,
    &ChaikinMoneyFlow::STANDARD,
];

static CUSTOM_INDICATORS: [&dyn Indicator; 3] = [
    &GoldenDeathCross,
    &PriceActionPatterns,
    &FiftyTwoWeekExtremes,
];

/// Serializable description of a registered indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDescriptor {
    pub name: String,
    pub description: String,
    pub category: IndicatorCategory,
}

impl IndicatorDescriptor {
    pub fn of(indicator: &dyn Indicator) -> Self {
        Self {
            name: indicator.name().to_string(),
            description: indicator.description().to_string(),
            category: indicator.category(),
        }
    }
}

/// Fixed catalog of indicators, organized by category.
pub struct IndicatorRegistry;

impl IndicatorRegistry {
    /// Ordered, non-empty indicator sequence of a category.
    pub fn indicators_for_category(category: IndicatorCategory) -> &'static [&'static dyn Indicator] {
        match category {
            IndicatorCategory::Trend => &TREND_INDICATORS,
            IndicatorCategory::Momentum => &MOMENTUM_INDICATORS,
            IndicatorCategory::Volatility => &VOLATILITY_INDICATORS,
            IndicatorCategory::Volume => &VOLUME_INDICATORS,
            IndicatorCategory::Custom => &CUSTOM_INDICATORS,
        }
    }

    /// Get all categories
    pub fn all_categories() -> Vec<IndicatorCategory> {
        IndicatorCategory::ALL.to_vec()
    }

    pub fn catalog(category: IndicatorCategory) -> Vec<IndicatorDescriptor> {
        Self::indicators_for_category(category)
            .iter()
            .map(|indicator| IndicatorDescriptor::of(*indicator))
            .collect()
    }

    /// Look up a registered indicator by its display name.
    pub fn find(name: &str) -> Option<&'static dyn Indicator> {
        IndicatorCategory::ALL
            .into_iter()
            .flat_map(Self::indicators_for_category)
            .copied()
            .find(|indicator| indicator.name() == name)
    }
}

/// Shorthand for [`IndicatorRegistry::indicators_for_category`].
pub fn indicators_for_category(category: IndicatorCategory) -> &'static [&'static dyn Indicator] {
    IndicatorRegistry::indicators_for_category(category)
}
