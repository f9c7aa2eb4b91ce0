use serde::{Deserialize, Serialize};
use std::fmt;

use super::snapshot::StockSnapshot;

/// Resolved direction of a screening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalSignal {
    Buy,
    Short,
    Wait,
}

impl fmt::Display for FinalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FinalSignal::Buy => "Buy",
            FinalSignal::Short => "Short",
            FinalSignal::Wait => "Wait",
        };
        f.pad(label)
    }
}

/// Outcome of evaluating one snapshot against an indicator set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerResult {
    pub id: String,
    #[serde(rename = "stock")]
    pub snapshot: StockSnapshot,
    /// Fired indicators in registry order, e.g. `"RSI (Buy)"`.
    pub indicators: Vec<String>,
    pub buy_signals: u32,
    pub short_signals: u32,
    pub total_score: i32,
    pub final_signal: FinalSignal,
    pub strength: u32,
}

impl ScreenerResult {
    pub fn symbol(&self) -> &str {
        &self.snapshot.symbol
    }
}
