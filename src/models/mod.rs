//! Shared data models spanning the engine layers.

pub mod signal;
pub mod snapshot;

pub use signal::{FinalSignal, ScreenerResult};
pub use snapshot::{IndicatorField, PriceActionPattern, StockSnapshot, SupertrendState};
