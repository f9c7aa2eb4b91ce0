//! External collaborators supplying snapshots.

pub mod market_data;

pub use market_data::{MockMarketData, SnapshotSource};
