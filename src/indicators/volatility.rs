//! Volatility rules: Bollinger Bands, ATR expansion and Donchian breakouts.

use super::{Indicator, IndicatorCategory};
use crate::error::Result;
use crate::models::{IndicatorField as Field, StockSnapshot};

/// Band touches fire; sitting either side of the midline only leans.
pub struct BollingerBands;

struct Bands {
    price: f64,
    upper: f64,
    mid: f64,
    lower: f64,
}

impl Bands {
    fn read(snapshot: &StockSnapshot) -> Result<Self> {
        Ok(Self {
            price: snapshot.value(Field::Price)?,
            upper: snapshot.value(Field::BbandsUpper)?,
            mid: snapshot.value(Field::BbandsMid)?,
            lower: snapshot.value(Field::BbandsLower)?,
        })
    }
}

impl Indicator for BollingerBands {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volatility
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn description(&self) -> &str {
        "Bollinger Bands show price volatility and potential reversal points"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let bands = Bands::read(snapshot)?;
        Ok(bands.price <= bands.lower)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let bands = Bands::read(snapshot)?;
        Ok(bands.price >= bands.upper)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let b = Bands::read(snapshot)?;
        let score = if b.price <= b.lower {
            2
        } else if b.price >= b.upper {
            -2
        } else if b.price < b.mid {
            1
        } else if b.price > b.mid {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

/// ATR above `min_atr_ratio` of price, directed by the day's change.
#[derive(Debug, Clone, Copy)]
pub struct AtrExpansion {
    pub min_atr_ratio: f64,
}

impl AtrExpansion {
    pub const STANDARD: Self = Self { min_atr_ratio: 0.02 };

    fn read(&self, snapshot: &StockSnapshot) -> Result<(bool, f64)> {
        let atr = snapshot.value(Field::Atr)?;
        let price = snapshot.value(Field::Price)?;
        let change = snapshot.value(Field::Change)?;
        Ok((atr > price * self.min_atr_ratio, change))
    }
}

impl Default for AtrExpansion {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for AtrExpansion {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volatility
    }

    fn name(&self) -> &str {
        "ATR"
    }

    fn description(&self) -> &str {
        "ATR measures market volatility"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (expanded, change) = self.read(snapshot)?;
        Ok(expanded && change > 0.0)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (expanded, change) = self.read(snapshot)?;
        Ok(expanded && change < 0.0)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        // ATR has no direction of its own; the change supplies it.
        let (expanded, change) = self.read(snapshot)?;
        let score = match expanded {
            true if change > 0.0 => 1,
            true if change < 0.0 => -1,
            _ => 0,
        };
        Ok(score)
    }
}

pub struct DonchianBreakout;

fn channel(snapshot: &StockSnapshot) -> Result<(f64, f64, f64)> {
    Ok((
        snapshot.value(Field::Price)?,
        snapshot.value(Field::DonchianUpper)?,
        snapshot.value(Field::DonchianLower)?,
    ))
}

impl Indicator for DonchianBreakout {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volatility
    }

    fn name(&self) -> &str {
        "Donchian Channels"
    }

    fn description(&self) -> &str {
        "Donchian Channels identify breakouts"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (price, upper, _) = channel(snapshot)?;
        Ok(price >= upper)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (price, _, lower) = channel(snapshot)?;
        Ok(price <= lower)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (price, upper, lower) = channel(snapshot)?;
        let score = if price >= upper {
            2
        } else if price <= lower {
            -2
        } else {
            0
        };
        Ok(score)
    }
}
