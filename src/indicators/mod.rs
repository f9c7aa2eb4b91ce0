//! Indicator rules and the category registry.

pub mod custom;
pub mod momentum;
pub mod registry;
pub mod set;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use registry::*;
pub use set::IndicatorSet;

use crate::error::Result;
use crate::models::StockSnapshot;

/// A named screening rule evaluated against one snapshot.
///
/// Implementations read precomputed values only. A well-formed rule never
/// fires buy and short on the same snapshot, scores positive when buy fires
/// and negative when short fires.
pub trait Indicator: Send + Sync {
    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory;

    /// Get the name of the indicator
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn buy_fires(&self, snapshot: &StockSnapshot) -> Result<bool>;

    fn short_fires(&self, snapshot: &StockSnapshot) -> Result<bool>;

    /// Signed conviction, typically within [-3, 3].
    fn score(&self, snapshot: &StockSnapshot) -> Result<i32>;
}
