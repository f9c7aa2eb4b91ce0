//! Display filters applied to a finished screen.

use serde::{Deserialize, Serialize};

use crate::models::{FinalSignal, ScreenerResult};
use crate::signals::aggregation::ScreenReport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenerFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_volume: Option<f64>,
    pub min_change: Option<f64>,
    pub max_change: Option<f64>,
    /// Case-insensitive match against symbol or name.
    pub search: Option<String>,
    pub signal: Option<FinalSignal>,
    pub min_strength: Option<u32>,
}

impl ScreenerFilters {
    pub fn matches(&self, result: &ScreenerResult) -> bool {
        let stock = &result.snapshot;

        if self.min_price.is_some_and(|min| stock.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| stock.price > max) {
            return false;
        }
        if self.min_volume.is_some_and(|min| stock.volume < min) {
            return false;
        }
        if self.min_change.is_some_and(|min| stock.change < min) {
            return false;
        }
        if self.max_change.is_some_and(|max| stock.change > max) {
            return false;
        }
        if self.signal.is_some_and(|signal| result.final_signal != signal) {
            return false;
        }
        if self.min_strength.is_some_and(|min| result.strength < min) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                stock.symbol.to_lowercase().contains(&term) || stock.name.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    /// Keep only matching results; failures and ordering are preserved.
    pub fn apply(&self, mut report: ScreenReport) -> ScreenReport {
        report.results.retain(|result| self.matches(result));
        report
    }
}
