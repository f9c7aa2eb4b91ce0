//! Service-facing primitives (HTTP surface, report cache)

pub mod cache;
pub mod http;

pub use cache::ReportCache;
pub use http::*;
