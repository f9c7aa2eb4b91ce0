//! Technical-indicator screening engine.
//!
//! Scores stock snapshots against categorized indicator rules and reduces the
//! per-indicator firings into one `Buy` / `Short` / `Wait` signal with a 0-10
//! strength.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{Result, ScreenerError};
