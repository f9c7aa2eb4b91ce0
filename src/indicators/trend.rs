//! Trend rules: moving-average alignment, MACD, Supertrend and ADX.

use super::{Indicator, IndicatorCategory};
use crate::error::Result;
use crate::models::{IndicatorField as Field, StockSnapshot, SupertrendState};

/// Price stacked above SMA50 above SMA200, confirmed by EMA20.
pub struct MovingAverageAlignment;

struct Averages {
    price: f64,
    sma50: f64,
    sma200: f64,
    ema20: f64,
}

impl Averages {
    fn read(snapshot: &StockSnapshot) -> Result<Self> {
        Ok(Self {
            price: snapshot.value(Field::Price)?,
            sma50: snapshot.value(Field::Sma50)?,
            sma200: snapshot.value(Field::Sma200)?,
            ema20: snapshot.value(Field::Ema20)?,
        })
    }

    fn stacked_up(&self) -> bool {
        self.price > self.sma50 && self.sma50 > self.sma200
    }

    fn stacked_down(&self) -> bool {
        self.price < self.sma50 && self.sma50 < self.sma200
    }
}

impl Indicator for MovingAverageAlignment {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn name(&self) -> &str {
        "SMA/EMA"
    }

    fn description(&self) -> &str {
        "Moving averages help identify the direction of the trend"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let ma = Averages::read(snapshot)?;
        Ok(ma.stacked_up() && ma.price > ma.ema20)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let ma = Averages::read(snapshot)?;
        Ok(ma.stacked_down() && ma.price < ma.ema20)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let ma = Averages::read(snapshot)?;
        let score = if ma.stacked_up() {
            2
        } else if ma.stacked_down() {
            -2
        } else if ma.price > ma.ema20 {
            1
        } else if ma.price < ma.ema20 {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

/// MACD line against its signal line, confirmed by the histogram.
pub struct MacdCrossover;

fn macd_lines(snapshot: &StockSnapshot) -> Result<(f64, f64, f64)> {
    Ok((
        snapshot.value(Field::Macd)?,
        snapshot.value(Field::MacdSignal)?,
        snapshot.value(Field::MacdHistogram)?,
    ))
}

impl Indicator for MacdCrossover {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn description(&self) -> &str {
        "MACD shows momentum and potential reversals"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (macd, signal, histogram) = macd_lines(snapshot)?;
        Ok(histogram > 0.0 && macd > signal)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (macd, signal, histogram) = macd_lines(snapshot)?;
        Ok(histogram < 0.0 && macd < signal)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (macd, signal, histogram) = macd_lines(snapshot)?;
        let score = if macd > signal && histogram > 0.0 {
            2
        } else if macd < signal && histogram < 0.0 {
            -2
        } else if macd > signal {
            1
        } else if macd < signal {
            -1
        } else {
            0
        };
        Ok(score)
    }
}

pub struct Supertrend;

impl Indicator for Supertrend {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn name(&self) -> &str {
        "Supertrend"
    }

    fn description(&self) -> &str {
        "Supertrend indicator provides clear buy and sell signals"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.supertrend()? == SupertrendState::Buy)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        Ok(snapshot.supertrend()? == SupertrendState::Sell)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        Ok(match snapshot.supertrend()? {
            SupertrendState::Buy => 2,
            SupertrendState::Sell => -2,
            SupertrendState::Neutral => 0,
        })
    }
}

/// ADX above `min_adx` with the dominant directional index deciding the side.
#[derive(Debug, Clone, Copy)]
pub struct AdxTrendStrength {
    pub min_adx: f64,
}

impl AdxTrendStrength {
    pub const STANDARD: Self = Self { min_adx: 25.0 };

    fn read(&self, snapshot: &StockSnapshot) -> Result<(bool, f64, f64)> {
        let adx = snapshot.value(Field::Adx)?;
        let plus_di = snapshot.value(Field::PlusDi)?;
        let minus_di = snapshot.value(Field::MinusDi)?;
        Ok((adx > self.min_adx, plus_di, minus_di))
    }
}

impl Default for AdxTrendStrength {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Indicator for AdxTrendStrength {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn name(&self) -> &str {
        "ADX"
    }

    fn description(&self) -> &str {
        "ADX measures trend strength"
    }

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (trending, plus_di, minus_di) = self.read(snapshot)?;
        Ok(trending && plus_di > minus_di)
    }

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool> {
        let (trending, plus_di, minus_di) = self.read(snapshot)?;
        Ok(trending && minus_di > plus_di)
    }

    fn score(&self, snapshot: &StockSnapshot) -> Result<i32> {
        let (trending, plus_di, minus_di) = self.read(snapshot)?;
        let score = match trending {
            true if plus_di > minus_di => 2,
            true if minus_di > plus_di => -2,
            _ => 0,
        };
        Ok(score)
    }
}
