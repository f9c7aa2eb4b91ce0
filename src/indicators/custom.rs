//! Event rules read straight off boolean flags and the pattern label.
//!
//! These fire rarely, so they carry higher fixed magnitudes than the
//! continuous rules.

use super::{Indicator, IndicatorCategory};
use crate::error::Result;
use crate::models::StockSnapshot;

pub struct GoldenDeathCross;

impl Indicator for GoldenDeathCross {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Custom
    }

    fn name(&self) -> &str {
        "Golden/Death Cross"
    }

    fn description(&self) -> &str {
        "Golden Cross (50 EMA crosses above 200 EMA) and Death Cross (opposite)"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.is_golden_cross)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.is_death_cross)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        Ok(if snapshot.is_golden_cross {
            3
        } else if snapshot.is_death_cross {
            -3
        } else {
            0
        })
    }
}

pub struct PriceActionPatterns;

impl Indicator for PriceActionPatterns {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Custom
    }

    fn name(&self) -> &str {
        "Price Action Patterns"
    }

    fn description(&self) -> &str {
        "Key price action patterns like engulfing, doji, etc."
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.price_action_pattern.is_bullish())
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.price_action_pattern.is_bearish())
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let pattern = snapshot.price_action_pattern;
        Ok(if pattern.is_bullish() {
            2
        } else if pattern.is_bearish() {
            -2
        } else {
            0
        })
    }
}

pub struct FiftyTwoWeekExtremes;

impl Indicator for FiftyTwoWeekExtremes {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Custom
    }

    fn name(&self) -> &str {
        "52-Week High/Low"
    }

    fn description(&self) -> &str {
        "Proximity to 52-week high or low"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.is_52_week_high)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.is_52_week_low)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        Ok(if snapshot.is_52_week_high {
            2
        } else if snapshot.is_52_week_low {
            -2
        } else {
            0
        })
    }
}
