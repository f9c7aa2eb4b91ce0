//! Signal resolution and strength calculation

use serde::{Deserialize, Serialize};

use crate::models::FinalSignal;

/// Cut-offs applied when reducing indicator firings to one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Aggregate score must exceed this magnitude (strictly) to leave `Wait`.
    pub score_threshold: i32,
    /// Upper bound of the strength scale.
    pub max_strength: u32,
}

impl SignalThresholds {
    pub const DEFAULT_SCORE_THRESHOLD: i32 = 3;
    pub const DEFAULT_MAX_STRENGTH: u32 = 10;
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            score_threshold: Self::DEFAULT_SCORE_THRESHOLD,
            max_strength: Self::DEFAULT_MAX_STRENGTH,
        }
    }
}

/// Resolve the final signal.
///
/// A direction requires both a strong aggregate score and a majority of
/// firing indicators on that side; anything else waits.
pub fn resolve_signal(
    total_score: i32,
    buy_signals: u32,
    short_signals: u32,
    thresholds: &SignalThresholds,
) -> FinalSignal {
    if total_score > thresholds.score_threshold && buy_signals > short_signals {
        FinalSignal::Buy
    } else if total_score < -thresholds.score_threshold && short_signals > buy_signals {
        FinalSignal::Short
    } else {
        FinalSignal::Wait
    }
}

/// Strength rewards conviction (score magnitude) and breadth (agreeing
/// indicators), capped at `max_strength`.
pub fn calculate_strength(
    total_score: i32,
    buy_signals: u32,
    short_signals: u32,
    thresholds: &SignalThresholds,
) -> u32 {
    total_score
        .unsigned_abs()
        .saturating_add(buy_signals.max(short_signals))
        .min(thresholds.max_strength)
}
