use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{Result, ScreenerError};

/// Supertrend direction as reported by the data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupertrendState {
    Buy,
    Sell,
    Neutral,
}

/// Candlestick pattern detected on the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceActionPattern {
    BullishEngulfing,
    BearishEngulfing,
    Hammer,
    ShootingStar,
    MorningStar,
    EveningStar,
    PiercingLine,
    DarkCloudCover,
    Doji,
    #[default]
    None,
}

impl PriceActionPattern {
    pub const ALL: [PriceActionPattern; 10] = [
        PriceActionPattern::BullishEngulfing,
        PriceActionPattern::BearishEngulfing,
        PriceActionPattern::Hammer,
        PriceActionPattern::ShootingStar,
        PriceActionPattern::MorningStar,
        PriceActionPattern::EveningStar,
        PriceActionPattern::PiercingLine,
        PriceActionPattern::DarkCloudCover,
        PriceActionPattern::Doji,
        PriceActionPattern::None,
    ];

    pub fn is_bullish(self) -> bool {
        matches!(
            self,
            PriceActionPattern::BullishEngulfing
                | PriceActionPattern::Hammer
                | PriceActionPattern::MorningStar
                | PriceActionPattern::PiercingLine
        )
    }

    pub fn is_bearish(self) -> bool {
        matches!(
            self,
            PriceActionPattern::BearishEngulfing
                | PriceActionPattern::ShootingStar
                | PriceActionPattern::EveningStar
                | PriceActionPattern::DarkCloudCover
        )
    }
}

/// Numeric values an indicator may read from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorField {
    Price,
    Change,
    Volume,
    Sma50,
    Sma200,
    Ema20,
    Macd,
    MacdSignal,
    MacdHistogram,
    Adx,
    PlusDi,
    MinusDi,
    Rsi,
    StochK,
    StochD,
    Cci,
    MomentumValue,
    BbandsUpper,
    BbandsMid,
    BbandsLower,
    Atr,
    DonchianUpper,
    DonchianLower,
    VolumeMa20,
    Obv,
    Vpt,
    Cmf,
}

impl IndicatorField {
    pub const ALL: [IndicatorField; 27] = [
        IndicatorField::Price,
        IndicatorField::Change,
        IndicatorField::Volume,
        IndicatorField::Sma50,
        IndicatorField::Sma200,
        IndicatorField::Ema20,
        IndicatorField::Macd,
        IndicatorField::MacdSignal,
        IndicatorField::MacdHistogram,
        IndicatorField::Adx,
        IndicatorField::PlusDi,
        IndicatorField::MinusDi,
        IndicatorField::Rsi,
        IndicatorField::StochK,
        IndicatorField::StochD,
        IndicatorField::Cci,
        IndicatorField::MomentumValue,
        IndicatorField::BbandsUpper,
        IndicatorField::BbandsMid,
        IndicatorField::BbandsLower,
        IndicatorField::Atr,
        IndicatorField::DonchianUpper,
        IndicatorField::DonchianLower,
        IndicatorField::VolumeMa20,
        IndicatorField::Obv,
        IndicatorField::Vpt,
        IndicatorField::Cmf,
    ];

    /// Quote fields every snapshot must carry.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            IndicatorField::Price | IndicatorField::Change | IndicatorField::Volume
        )
    }

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorField::Price => "price",
            IndicatorField::Change => "change",
            IndicatorField::Volume => "volume",
            IndicatorField::Sma50 => "sma50",
            IndicatorField::Sma200 => "sma200",
            IndicatorField::Ema20 => "ema20",
            IndicatorField::Macd => "macd",
            IndicatorField::MacdSignal => "macdSignal",
            IndicatorField::MacdHistogram => "macdHistogram",
            IndicatorField::Adx => "adx",
            IndicatorField::PlusDi => "plusDI",
            IndicatorField::MinusDi => "minusDI",
            IndicatorField::Rsi => "rsi",
            IndicatorField::StochK => "stochK",
            IndicatorField::StochD => "stochD",
            IndicatorField::Cci => "cci",
            IndicatorField::MomentumValue => "momentumValue",
            IndicatorField::BbandsUpper => "bbandsUpper",
            IndicatorField::BbandsMid => "bbandsMid",
            IndicatorField::BbandsLower => "bbandsLower",
            IndicatorField::Atr => "atr",
            IndicatorField::DonchianUpper => "donchianUpper",
            IndicatorField::DonchianLower => "donchianLower",
            IndicatorField::VolumeMa20 => "volumeMA20",
            IndicatorField::Obv => "obv",
            IndicatorField::Vpt => "vpt",
            IndicatorField::Cmf => "cmf",
        }
    }
}

impl fmt::Display for IndicatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time quote for one security plus its precomputed indicators.
///
/// Every indicator value shares `timestamp`. Numeric indicator values are
/// optional on the wire; reading an absent one through [`StockSnapshot::value`]
/// fails instead of defaulting to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    // Trend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma200: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema20: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertrend: Option<SupertrendState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adx: Option<f64>,
    #[serde(default, rename = "plusDI", skip_serializing_if = "Option::is_none")]
    pub plus_di: Option<f64>,
    #[serde(default, rename = "minusDI", skip_serializing_if = "Option::is_none")]
    pub minus_di: Option<f64>,

    // Momentum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoch_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoch_d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cci: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub momentum_value: Option<f64>,

    // Volatility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbands_upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbands_mid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbands_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donchian_upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donchian_lower: Option<f64>,

    // Volume
    #[serde(default, rename = "volumeMA20", skip_serializing_if = "Option::is_none")]
    pub volume_ma20: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmf: Option<f64>,

    // Events
    #[serde(default)]
    pub is_golden_cross: bool,
    #[serde(default)]
    pub is_death_cross: bool,
    #[serde(default)]
    pub price_action_pattern: PriceActionPattern,
    #[serde(default, rename = "is52WeekHigh")]
    pub is_52_week_high: bool,
    #[serde(default, rename = "is52WeekLow")]
    pub is_52_week_low: bool,

    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl StockSnapshot {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64, change: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change,
            volume,
            exchange: None,
            sector: None,
            sma50: None,
            sma200: None,
            ema20: None,
            macd: None,
            macd_signal: None,
            macd_histogram: None,
            supertrend: None,
            adx: None,
            plus_di: None,
            minus_di: None,
            rsi: None,
            stoch_k: None,
            stoch_d: None,
            cci: None,
            momentum_value: None,
            bbands_upper: None,
            bbands_mid: None,
            bbands_lower: None,
            atr: None,
            donchian_upper: None,
            donchian_lower: None,
            volume_ma20: None,
            obv: None,
            vpt: None,
            cmf: None,
            is_golden_cross: false,
            is_death_cross: false,
            price_action_pattern: PriceActionPattern::None,
            is_52_week_high: false,
            is_52_week_low: false,
            timestamp: Utc::now(),
        }
    }

    /// Read a numeric field, failing on absent or non-finite values.
    pub fn value(&self, field: IndicatorField) -> Result<f64> {
        match self.raw(field) {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(ScreenerError::malformed(&self.symbol, field.as_str())),
        }
    }

    pub fn supertrend(&self) -> Result<SupertrendState> {
        self.supertrend
            .ok_or_else(|| ScreenerError::malformed(&self.symbol, "supertrend"))
    }

    fn raw(&self, field: IndicatorField) -> Option<f64> {
        match field {
            IndicatorField::Price => Some(self.price),
            IndicatorField::Change => Some(self.change),
            IndicatorField::Volume => Some(self.volume),
            IndicatorField::Sma50 => self.sma50,
            IndicatorField::Sma200 => self.sma200,
            IndicatorField::Ema20 => self.ema20,
            IndicatorField::Macd => self.macd,
            IndicatorField::MacdSignal => self.macd_signal,
            IndicatorField::MacdHistogram => self.macd_histogram,
            IndicatorField::Adx => self.adx,
            IndicatorField::PlusDi => self.plus_di,
            IndicatorField::MinusDi => self.minus_di,
            IndicatorField::Rsi => self.rsi,
            IndicatorField::StochK => self.stoch_k,
            IndicatorField::StochD => self.stoch_d,
            IndicatorField::Cci => self.cci,
            IndicatorField::MomentumValue => self.momentum_value,
            IndicatorField::BbandsUpper => self.bbands_upper,
            IndicatorField::BbandsMid => self.bbands_mid,
            IndicatorField::BbandsLower => self.bbands_lower,
            IndicatorField::Atr => self.atr,
            IndicatorField::DonchianUpper => self.donchian_upper,
            IndicatorField::DonchianLower => self.donchian_lower,
            IndicatorField::VolumeMa20 => self.volume_ma20,
            IndicatorField::Obv => self.obv,
            IndicatorField::Vpt => self.vpt,
            IndicatorField::Cmf => self.cmf,
        }
    }

    pub fn with_value(mut self, field: IndicatorField, value: f64) -> Self {
        let v = Some(value);
        match field {
            IndicatorField::Price => self.price = value,
            IndicatorField::Change => self.change = value,
            IndicatorField::Volume => self.volume = value,
            IndicatorField::Sma50 => self.sma50 = v,
            IndicatorField::Sma200 => self.sma200 = v,
            IndicatorField::Ema20 => self.ema20 = v,
            IndicatorField::Macd => self.macd = v,
            IndicatorField::MacdSignal => self.macd_signal = v,
            IndicatorField::MacdHistogram => self.macd_histogram = v,
            IndicatorField::Adx => self.adx = v,
            IndicatorField::PlusDi => self.plus_di = v,
            IndicatorField::MinusDi => self.minus_di = v,
            IndicatorField::Rsi => self.rsi = v,
            IndicatorField::StochK => self.stoch_k = v,
            IndicatorField::StochD => self.stoch_d = v,
            IndicatorField::Cci => self.cci = v,
            IndicatorField::MomentumValue => self.momentum_value = v,
            IndicatorField::BbandsUpper => self.bbands_upper = v,
            IndicatorField::BbandsMid => self.bbands_mid = v,
            IndicatorField::BbandsLower => self.bbands_lower = v,
            IndicatorField::Atr => self.atr = v,
            IndicatorField::DonchianUpper => self.donchian_upper = v,
            IndicatorField::DonchianLower => self.donchian_lower = v,
            IndicatorField::VolumeMa20 => self.volume_ma20 = v,
            IndicatorField::Obv => self.obv = v,
            IndicatorField::Vpt => self.vpt = v,
            IndicatorField::Cmf => self.cmf = v,
        }
        self
    }

    pub fn with_moving_averages(self, sma50: f64, sma200: f64, ema20: f64) -> Self {
        self.with_value(IndicatorField::Sma50, sma50)
            .with_value(IndicatorField::Sma200, sma200)
            .with_value(IndicatorField::Ema20, ema20)
    }

    pub fn with_macd(self, macd: f64, signal: f64, histogram: f64) -> Self {
        self.with_value(IndicatorField::Macd, macd)
            .with_value(IndicatorField::MacdSignal, signal)
            .with_value(IndicatorField::MacdHistogram, histogram)
    }

    pub fn with_supertrend(mut self, state: SupertrendState) -> Self {
        self.supertrend = Some(state);
        self
    }

    pub fn with_adx(self, adx: f64, plus_di: f64, minus_di: f64) -> Self {
        self.with_value(IndicatorField::Adx, adx)
            .with_value(IndicatorField::PlusDi, plus_di)
            .with_value(IndicatorField::MinusDi, minus_di)
    }

    pub fn with_rsi(self, rsi: f64) -> Self {
        self.with_value(IndicatorField::Rsi, rsi)
    }

    pub fn with_stochastic(self, k: f64, d: f64) -> Self {
        self.with_value(IndicatorField::StochK, k)
            .with_value(IndicatorField::StochD, d)
    }

    pub fn with_cci(self, cci: f64) -> Self {
        self.with_value(IndicatorField::Cci, cci)
    }

    pub fn with_momentum(self, momentum: f64) -> Self {
        self.with_value(IndicatorField::MomentumValue, momentum)
    }

    pub fn with_bollinger(self, upper: f64, mid: f64, lower: f64) -> Self {
        self.with_value(IndicatorField::BbandsUpper, upper)
            .with_value(IndicatorField::BbandsMid, mid)
            .with_value(IndicatorField::BbandsLower, lower)
    }

    pub fn with_atr(self, atr: f64) -> Self {
        self.with_value(IndicatorField::Atr, atr)
    }

    pub fn with_donchian(self, upper: f64, lower: f64) -> Self {
        self.with_value(IndicatorField::DonchianUpper, upper)
            .with_value(IndicatorField::DonchianLower, lower)
    }

    pub fn with_volume_flow(self, volume_ma20: f64, obv: f64, vpt: f64, cmf: f64) -> Self {
        self.with_value(IndicatorField::VolumeMa20, volume_ma20)
            .with_value(IndicatorField::Obv, obv)
            .with_value(IndicatorField::Vpt, vpt)
            .with_value(IndicatorField::Cmf, cmf)
    }

    pub fn with_crosses(mut self, golden: bool, death: bool) -> Self {
        self.is_golden_cross = golden;
        self.is_death_cross = death;
        self
    }

    pub fn with_pattern(mut self, pattern: PriceActionPattern) -> Self {
        self.price_action_pattern = pattern;
        self
    }

    pub fn with_52_week(mut self, high: bool, low: bool) -> Self {
        self.is_52_week_high = high;
        self.is_52_week_low = low;
        self
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Decode one element of a JSON batch.
    ///
    /// Failures become `MalformedSnapshot` naming the first offending field.
    /// Elements without a usable symbol are labelled `#<position>`.
    pub fn from_json(value: &Value, position: usize) -> Result<Self> {
        StockSnapshot::deserialize(value).map_err(|_| {
            let symbol = value
                .get("symbol")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", position));
            ScreenerError::MalformedSnapshot {
                symbol,
                field: offending_field(value),
            }
        })
    }
}

fn offending_field(value: &Value) -> &'static str {
    let Some(object) = value.as_object() else {
        return "snapshot";
    };

    for key in ["symbol", "name"] {
        if !object.get(key).is_some_and(Value::is_string) {
            return key;
        }
    }

    for field in IndicatorField::ALL {
        match object.get(field.as_str()) {
            None | Some(Value::Null) if field.is_required() => return field.as_str(),
            Some(entry) if !entry.is_null() && !entry.is_number() => return field.as_str(),
            _ => {}
        }
    }

    for key in [
        "isGoldenCross",
        "isDeathCross",
        "is52WeekHigh",
        "is52WeekLow",
    ] {
        if object.get(key).is_some_and(|entry| !entry.is_boolean()) {
            return key;
        }
    }

    let rejects = |key: &str, valid: fn(&Value) -> bool| {
        object.get(key).is_some_and(|entry| !valid(entry))
    };
    if rejects("supertrend", |v: &Value| {
        Option::<SupertrendState>::deserialize(v).is_ok()
    }) {
        return "supertrend";
    }
    if rejects("priceActionPattern", |v: &Value| PriceActionPattern::deserialize(v).is_ok()) {
        return "priceActionPattern";
    }
    if rejects("timestamp", |v: &Value| DateTime::<Utc>::deserialize(v).is_ok()) {
        return "timestamp";
    }
    for key in ["exchange", "sector"] {
        if object.get(key).is_some_and(|entry| !entry.is_null() && !entry.is_string()) {
            return key;
        }
    }

    "snapshot"
}
