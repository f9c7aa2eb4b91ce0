//! Momentum oscillators: RSI, Stochastic, CCI and raw price momentum.

use super::{Indicator, IndicatorCategory};
use crate::error::Result;
use crate::models::{IndicatorField as Field, StockSnapshot};

/// RSI with extreme zones that fire and near-extreme zones that only lean.
#[derive(Debug, Clone, Copy)]
pub struct RsiZones {
    pub oversold: f64,
    pub near_oversold: f64,
    pub near_overbought: f64,
    pub overbought: f64,
}

impl RsiZones {
    pub const STANDARD: Self = Self {
        oversold: 30.0,
        near_oversold: 40.0,
        near_overbought: 60.0,
        overbought: 70.0,
    };
}

impl Default for RsiZones {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for RsiZones {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn description(&self) -> &str {
        "RSI shows overbought and oversold conditions"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Rsi)? < self.oversold)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Rsi)? > self.overbought)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let rsi = snapshot.value(Field::Rsi)?;
        let score = if rsi < self.oversold {
            2
        } else if rsi < self.near_oversold {
            1
        } else if rsi > self.overbought {
            -2
        } else if rsi > self.near_overbought {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

/// %K turning inside an extreme zone; %K alone leans near the zones.
#[derive(Debug, Clone, Copy)]
pub struct StochasticReversal {
    pub oversold: f64,
    pub overbought: f64,
    pub lean_low: f64,
    pub lean_high: f64,
}

impl StochasticReversal {
    pub const STANDARD: Self = Self {
        oversold: 20.0,
        overbought: 80.0,
        lean_low: 30.0,
        lean_high: 70.0,
    };

    fn lines(snapshot: &StockSnapshot) -> Result<(f64, f64)> {
        Ok((snapshot.value(Field::StochK)?, snapshot.value(Field::StochD)?))
    }

    fn turning_up(&self, k: f64, d: f64) -> bool {
        k < self.oversold && k > d
    }

    fn turning_down(&self, k: f64, d: f64) -> bool {
        k > self.overbought && k < d
    }
}

impl Default for StochasticReversal {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for StochasticReversal {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn name(&self) -> &str {
        "Stochastic"
    }

    fn description(&self) -> &str {
        "Stochastic oscillator identifies potential reversals"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (k, d) = Self::lines(snapshot)?;
        Ok(self.turning_up(k, d))
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (k, d) = Self::lines(snapshot)?;
        Ok(self.turning_down(k, d))
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (k, d) = Self::lines(snapshot)?;
        let score = if self.turning_up(k, d) {
            2
        } else if self.turning_down(k, d) {
            -2
        } else if k < self.lean_low {
            1
        } else if k > self.lean_high {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CciExtremes {
    pub threshold: f64,
}

impl CciExtremes {
    pub const STANDARD: Self = Self { threshold: 100.0 };
}

impl Default for CciExtremes {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for CciExtremes {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn name(&self) -> &str {
        "CCI"
    }

    fn description(&self) -> &str {
        "CCI identifies cyclical turns in price"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Cci)? < -self.threshold)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Cci)? > self.threshold)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let cci = snapshot.value(Field::Cci)?;
        let score = if cci < -self.threshold {
            2
        } else if cci > self.threshold {
            -2
        } else {
            0
        };
        Ok(score)
    }
}

/// Momentum value agreeing with the day's price change.
pub struct PriceMomentum;

fn momentum_and_change(snapshot: &StockSnapshot) -> Result<(f64, f64)> {
    Ok((
        snapshot.value(Field::MomentumValue)?,
        snapshot.value(Field::Change)?,
    ))
}

impl Indicator for PriceMomentum {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn name(&self) -> &str {
        "Momentum"
    }

    fn description(&self) -> &str {
        "Momentum shows the rate of price change"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (momentum, change) = momentum_and_change(snapshot)?;
        Ok(momentum > 0.0 && change > 0.0)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (momentum, change) = momentum_and_change(snapshot)?;
        Ok(momentum < 0.0 && change < 0.0)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (momentum, change) = momentum_and_change(snapshot)?;
        let score = if momentum > 0.0 && change > 0.0 {
            2
        } else if momentum < 0.0 && change < 0.0 {
            -2
        } else if momentum > 0.0 {
            1
        } else if momentum < 0.0 {
            -1
        } else {
            0
        };
        Ok(score)
    }
}
