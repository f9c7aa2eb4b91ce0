//! Signal evaluation interfaces.

pub mod aggregation;
pub mod engine;
pub mod filters;
pub mod scoring;

pub use aggregation::*;
pub use engine::SignalEvaluator;
pub use filters::ScreenerFilters;
pub use scoring::*;
