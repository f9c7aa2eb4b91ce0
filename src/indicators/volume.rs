//! Volume rules: volume surges, OBV, VPT and Chaikin Money Flow.

use super::{Indicator, IndicatorCategory};
use crate::error::Result;
use crate::models::{IndicatorField as Field, StockSnapshot};

/// Volume above `multiple` times its 20-day average, directed by the change.
/// Moves beyond `strong_change` percent score double.
#[derive(Debug, Clone, Copy)]
pub struct VolumeSurge {
    pub multiple: f64,
    pub strong_change: f64,
}

impl VolumeSurge {
    pub const STANDARD: Self = Self {
        multiple: 2.0,
        strong_change: 3.0,
    };

    fn read(&self, snapshot: &StockSnapshot) -> Result<(bool, f64)> {
        let volume = snapshot.value(Field::Volume)?;
        let average = snapshot.value(Field::VolumeMa20)?;
        let change = snapshot.value(Field::Change)?;
        Ok((volume > average * self.multiple, change))
    }
}

impl Default for VolumeSurge {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for VolumeSurge {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn name(&self) -> &str {
        "Volume Moving Average"
    }

    fn description(&self) -> &str {
        "Volume MA identifies unusual trading activity"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (surge, change) = self.read(snapshot)?;
        Ok(surge && change > 0.0)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (surge, change) = self.read(snapshot)?;
        Ok(surge && change < 0.0)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (surge, change) = self.read(snapshot)?;
        if !surge {
            return Ok(0);
        }
        let score = if change > self.strong_change {
            2
        } else if change < -self.strong_change {
            -2
        } else if change > 0.0 {
            1
        } else if change < 0.0 {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

pub struct OnBalanceVolume;

fn obv_and_change(snapshot: &StockSnapshot) -> Result<(f64, f64)> {
    Ok((snapshot.value(Field::Obv)?, snapshot.value(Field::Change)?))
}

impl Indicator for OnBalanceVolume {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn name(&self) -> &str {
        "On-Balance Volume"
    }

    fn description(&self) -> &str {
        "OBV shows buying and selling pressure"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (obv, change) = obv_and_change(snapshot)?;
        Ok(obv > 0.0 && change > 0.0)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (obv, change) = obv_and_change(snapshot)?;
        Ok(obv < 0.0 && change < 0.0)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (obv, change) = obv_and_change(snapshot)?;
        let score = if obv > 0.0 && change > 0.0 {
            2
        } else if obv < 0.0 && change < 0.0 {
            -2
        } else if obv > 0.0 {
            1
        } else if obv < 0.0 {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

pub struct VolumePriceTrend;

impl Indicator for VolumePriceTrend {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn name(&self) -> &str {
        "Volume Price Trend"
    }

    fn description(&self) -> &str {
        "VPT combines price and volume"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Vpt)? > 0.0)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Vpt)? < 0.0)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let vpt = snapshot.value(Field::Vpt)?;
        Ok(if vpt > 0.0 {
            1
        } else if vpt < 0.0 {
            -1
        } else {
            0
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChaikinMoneyFlow {
    pub threshold: f64,
}

impl ChaikinMoneyFlow {
    pub const STANDARD: Self = Self { threshold: 0.1 };
}

impl Default for ChaikinMoneyFlow {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for ChaikinMoneyFlow {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn name(&self) -> &str {
        "Chaikin Money Flow"
    }

    fn description(&self) -> &str {
        "CMF shows buying or selling pressure"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Cmf)? > self.threshold)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.value(Field::Cmf)? < -self.threshold)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let cmf = snapshot.value(Field::Cmf)?;
        let score = if cmf > self.threshold {
            2
        } else if cmf < -self.threshold {
            -2
        } else if cmf > 0.0 {
            1
        } else if cmf < 0.0 {
            -1
        } else {
            0
        };
        Ok(score)
    }
}
