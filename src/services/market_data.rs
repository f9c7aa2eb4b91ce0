//! Snapshot source interface and a mock data generator.
//!
//! The mock produces internally consistent, trend-biased snapshots for demos
//! and tests. It stands in for a real indicator pipeline.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{PriceActionPattern, StockSnapshot, SupertrendState};

pub trait SnapshotSource: Send + Sync {
    /// Latest snapshots, at most `limit` of them.
    fn fetch_snapshots(
        &self,
        limit: usize,
    ) -> Result<Vec<StockSnapshot>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Symbol, company name and sector.
const UNIVERSE: [(&str, &str, &str); 25] = [
    ("RELIANCE", "Reliance Industries", "Energy"),
    ("TCS", "Tata Consultancy Services", "IT"),
    ("INFY", "Infosys", "IT"),
    ("HDFCBANK", "HDFC Bank", "Banking"),
    ("BHARTIARTL", "Bharti Airtel", "Telecom"),
    ("ICICIBANK", "ICICI Bank", "Banking"),
    ("SBIN", "State Bank of India", "Banking"),
    ("TATAMOTORS", "Tata Motors", "Automobile"),
    ("ASIANPAINT", "Asian Paints", "Consumer Goods"),
    ("WIPRO", "Wipro", "IT"),
    ("ITC", "ITC Limited", "Consumer Goods"),
    ("KOTAKBANK", "Kotak Mahindra Bank", "Banking"),
    ("LT", "Larsen & Toubro", "Construction"),
    ("HINDUNILVR", "Hindustan Unilever", "Consumer Goods"),
    ("MARUTI", "Maruti Suzuki India", "Automobile"),
    ("AXISBANK", "Axis Bank", "Banking"),
    ("SUNPHARMA", "Sun Pharmaceutical", "Pharma"),
    ("ONGC", "Oil and Natural Gas Corporation", "Energy"),
    ("BAJFINANCE", "Bajaj Finance", "Financial Services"),
    ("NTPC", "NTPC Limited", "Power"),
    ("TITAN", "Titan Company", "Consumer Goods"),
    ("POWERGRID", "Power Grid Corporation", "Power"),
    ("TECHM", "Tech Mahindra", "IT"),
    ("ULTRACEMCO", "UltraTech Cement", "Cement"),
    ("BAJAJFINSV", "Bajaj Finserv", "Financial Services"),
];

/// Random snapshot generator over a fixed NSE large-cap universe.
#[derive(Debug, Clone, Default)]
pub struct MockMarketData {
    seed: Option<u64>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Every call with the same seed yields the same snapshots.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn universe_size() -> usize {
        UNIVERSE.len()
    }

    /// Generate up to `count` distinct snapshots (capped at the universe size).
    pub fn generate(&self, count: usize) -> Vec<StockSnapshot> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut picks: Vec<usize> = (0..UNIVERSE.len()).collect();
        picks.shuffle(&mut rng);
        picks.truncate(count.min(UNIVERSE.len()));

        let generated_at = Utc::now();
        picks
            .into_iter()
            .map(|idx| {
                let (symbol, name, sector) = UNIVERSE[idx];
                generate_snapshot(&mut rng, symbol, name)
                    .with_sector(sector)
                    .with_timestamp(generated_at)
            })
            .collect()
    }
}

impl SnapshotSource for MockMarketData {
    fn fetch_snapshots(
        &self,
        limit: usize,
    ) -> Result<Vec<StockSnapshot>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.generate(limit))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn generate_snapshot(rng: &mut StdRng, symbol: &str, name: &str) -> StockSnapshot {
    let price = round2(rng.gen_range(100.0..5100.0));
    let change = round2(rng.gen_range(-5.0..5.0));

    // -1 bearish, 0 neutral, 1 bullish; every indicator leans the same way.
    let bias: i32 = rng.gen_range(-1..=1);
    let b = f64::from(bias);

    let bias_multiplier = 1.0 + b * 0.1;
    let sma200 = round2(price * rng.gen_range(0.85..1.15));
    let sma50 = round2(sma200 * bias_multiplier);
    let ema20 = round2(sma50 * bias_multiplier);

    let macd_signal = round2(rng.gen_range(-5.0..5.0));
    let macd = round2(macd_signal + b * rng.gen_range(0.0..3.0));
    let macd_histogram = round2(macd - macd_signal);

    let supertrend = match bias {
        1 => SupertrendState::Buy,
        -1 => SupertrendState::Sell,
        _ => *[SupertrendState::Buy, SupertrendState::Sell, SupertrendState::Neutral]
            .choose(rng)
            .unwrap_or(&SupertrendState::Neutral),
    };

    let adx = round2(rng.gen_range(5.0..45.0));
    let plus_di = round2(rng.gen_range(10.0..40.0) + b * 5.0);
    let minus_di = round2(rng.gen_range(10.0..40.0) - b * 5.0);

    let rsi = if bias == 0 {
        round2(rng.gen_range(20.0..80.0))
    } else {
        round2(rng.gen_range(30.0..70.0))
    };

    let stoch_k = round2(rng.gen_range(10.0..90.0) + b * 10.0);
    let stoch_d = round2(stoch_k + rng.gen_range(-5.0..5.0));
    let cci = round2(rng.gen_range(-150.0..150.0) + b * 50.0);
    let momentum = round2(rng.gen_range(-5.0..5.0) + b * 3.0);

    let volume_base = rng.gen_range(50_000.0..1_050_000.0_f64);
    let volume = volume_base.floor();
    let volume_ma20 = (volume_base * rng.gen_range(0.75..1.25)).floor();

    let band_width = price * rng.gen_range(0.02..0.12);
    let atr = round2(price * rng.gen_range(0.01..0.04));
    let donchian_width = price * rng.gen_range(0.05..0.20);

    let obv = (rng.gen_range(-1_000_000.0..1_000_000.0) + b * 500_000.0).round();
    let vpt = round2(rng.gen_range(-100.0..100.0) + b * 50.0);
    let cmf = round2(rng.gen_range(-0.2..0.2) + b * 0.1);

    let golden = bias == 1 && rng.gen_bool(0.3);
    let death = bias == -1 && rng.gen_bool(0.3);
    let pattern = *PriceActionPattern::ALL
        .choose(rng)
        .unwrap_or(&PriceActionPattern::None);
    let high_52 = bias == 1 && rng.gen_bool(0.2);
    let low_52 = bias == -1 && rng.gen_bool(0.2);

    StockSnapshot::new(symbol, name, price, change, volume)
        .with_exchange("NSE")
        .with_moving_averages(sma50, sma200, ema20)
        .with_macd(macd, macd_signal, macd_histogram)
        .with_supertrend(supertrend)
        .with_adx(adx, plus_di, minus_di)
        .with_rsi(rsi)
        .with_stochastic(stoch_k, stoch_d)
        .with_cci(cci)
        .with_momentum(momentum)
        .with_bollinger(round2(price + band_width), price, round2(price - band_width))
        .with_atr(atr)
        .with_donchian(round2(price + donchian_width), round2(price - donchian_width))
        .with_volume_flow(volume_ma20, obv, vpt, cmf)
        .with_crosses(golden, death)
        .with_pattern(pattern)
        .with_52_week(high_52, low_52)
}
