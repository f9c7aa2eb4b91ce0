//! Batch screening with per-snapshot failure isolation

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::ScreenerError;
use crate::indicators::{IndicatorCategory, IndicatorSet};
use crate::metrics::Metrics;
use crate::models::{FinalSignal, ScreenerResult, StockSnapshot};
use crate::signals::engine::SignalEvaluator;

/// A snapshot that could not be evaluated.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenFailure {
    pub symbol: String,
    pub message: String,
    #[serde(skip)]
    pub error: ScreenerError,
}

impl ScreenFailure {
    fn new(symbol: &str, error: ScreenerError) -> Self {
        Self {
            symbol: symbol.to_string(),
            message: error.to_string(),
            error,
        }
    }
}

/// Ranked results of one batch, plus the snapshots that failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScreenReport {
    /// Sorted by descending `|total_score|`; ties keep input order.
    pub results: Vec<ScreenerResult>,
    pub failures: Vec<ScreenFailure>,
}

impl ScreenReport {
    pub fn count_by_signal(&self, signal: FinalSignal) -> usize {
        self.results
            .iter()
            .filter(|r| r.final_signal == signal)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the evaluator across many snapshots.
#[derive(Clone, Default)]
pub struct Screener {
    evaluator: SignalEvaluator,
    metrics: Option<Arc<Metrics>>,
}

impl Screener {
    pub fn new(evaluator: SignalEvaluator) -> Self {
        Self {
            evaluator,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn screen_category(&self, snapshots: &[StockSnapshot], category: IndicatorCategory) -> ScreenReport {
        let report = self.screen(snapshots, &IndicatorSet::for_category(category));
        self.record(category, &report);
        report
    }

    /// Screen a raw JSON batch. Elements that do not decode into a snapshot
    /// are reported as failures alongside the evaluation failures.
    pub fn screen_json(&self, payload: &[Value], category: IndicatorCategory) -> ScreenReport {
        let mut snapshots = Vec::with_capacity(payload.len());
        let mut rejected = Vec::new();
        for (position, value) in payload.iter().enumerate() {
            match StockSnapshot::from_json(value, position) {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(error) => {
                    let symbol = match &error {
                        ScreenerError::MalformedSnapshot { symbol, .. } => symbol.clone(),
                        _ => format!("#{}", position),
                    };
                    warn!(symbol = %symbol, error = %error, "Rejected snapshot payload");
                    rejected.push(ScreenFailure::new(&symbol, error));
                }
            }
        }

        let mut report = self.screen(&snapshots, &IndicatorSet::for_category(category));
        rejected.append(&mut report.failures);
        report.failures = rejected;
        self.record(category, &report);
        report
    }

    fn record(&self, category: IndicatorCategory, report: &ScreenReport) {
        if let Some(metrics) = &self.metrics {
            metrics.record_screen(category, report.results.len(), report.failures.len());
        }
    }

    /// Evaluate every snapshot independently in parallel, then rank.
    ///
    /// A failing snapshot is reported in `failures` and never hides the
    /// results of the others.
    pub fn screen(&self, snapshots: &[StockSnapshot], indicators: &IndicatorSet<'_>) -> ScreenReport {
        let outcomes: Vec<_> = snapshots
            .par_iter()
            .map(|snapshot| (snapshot, self.evaluator.evaluate(snapshot, indicators)))
            .collect();

        let mut report = ScreenReport::default();
        for (snapshot, outcome) in outcomes {
            match outcome {
                Ok(result) => report.results.push(result),
                Err(error) => {
                    warn!(symbol = %snapshot.symbol, error = %error, "Snapshot evaluation failed");
                    report.failures.push(ScreenFailure::new(&snapshot.symbol, error));
                }
            }
        }

        report
            .results
            .sort_by_key(|result| Reverse(result.total_score.unsigned_abs()));

        debug!(
            evaluated = report.results.len(),
            failed = report.failures.len(),
            buys = report.count_by_signal(FinalSignal::Buy),
            shorts = report.count_by_signal(FinalSignal::Short),
            "Screen completed"
        );

        report
    }
}
