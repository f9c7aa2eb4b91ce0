//! Single-snapshot signal evaluation.

use tracing::trace;

use crate::error::{Result, ScreenerError};
use crate::indicators::Indicator;
use crate::models::{FinalSignal, ScreenerResult, StockSnapshot};
use crate::signals::scoring::{calculate_strength, resolve_signal, SignalThresholds};

/// Reduces the indicator firings on one snapshot into one decision.
///
/// Stateless apart from its thresholds; the same inputs always produce the
/// same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEvaluator {
    thresholds: SignalThresholds,
}

impl SignalEvaluator {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    /// Evaluate every indicator in order and resolve the aggregate signal.
    ///
    /// Short is only checked when buy did not fire, so buy takes precedence
    /// for a rule where both would hold. Any indicator error aborts the whole
    /// evaluation.
    pub fn evaluate(
        &self,
        snapshot: &StockSnapshot,
        indicators: &[&dyn Indicator],
    ) -> Result<ScreenerResult> {
        if indicators.is_empty() {
            return Err(ScreenerError::definition(
                "indicator set",
                "cannot evaluate an empty indicator set",
            ));
        }

        let mut buy_signals = 0u32;
        let mut short_signals = 0u32;
        let mut total_score = 0i32;
        let mut fired = Vec::new();

        for indicator in indicators {
            let score = indicator.score(snapshot)?;
            total_score += score;

            if indicator.buy_fires(snapshot)? {
                buy_signals += 1;
                fired.push(format!("{} ({})", indicator.name(), FinalSignal::Buy));
            } else if indicator.short_fires(snapshot)? {
                short_signals += 1;
                fired.push(format!("{} ({})", indicator.name(), FinalSignal::Short));
            }
        }

        let final_signal = resolve_signal(total_score, buy_signals, short_signals, &self.thresholds);
        let strength = calculate_strength(total_score, buy_signals, short_signals, &self.thresholds);

        trace!(
            symbol = %snapshot.symbol,
            total_score,
            buy_signals,
            short_signals,
            signal = %final_signal,
            strength,
            "Snapshot evaluated"
        );

        Ok(ScreenerResult {
            id: snapshot.symbol.clone(),
            snapshot: snapshot.clone(),
            indicators: fired,
            buy_signals,
            short_signals,
            total_score,
            final_signal,
            strength,
        })
    }
}
