//! Per-category cache of screen reports with a fixed TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::indicators::IndicatorCategory;
use crate::signals::ScreenReport;

pub struct ReportCache {
    ttl: Duration,
    entries: RwLock<HashMap<IndicatorCategory, (Instant, Arc<ScreenReport>)>>,
}

impl ReportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached report, if one exists and is younger than the TTL.
    pub async fn get(&self, category: IndicatorCategory) -> Option<Arc<ScreenReport>> {
        let entries = self.entries.read().await;
        entries
            .get(&category)
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, report)| report.clone())
    }

    pub async fn insert(&self, category: IndicatorCategory, report: ScreenReport) -> Arc<ScreenReport> {
        let report = Arc::new(report);
        self.entries
            .write()
            .await
            .insert(category, (Instant::now(), report.clone()));
        report
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
