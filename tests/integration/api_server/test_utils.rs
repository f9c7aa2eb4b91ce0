//! Test utilities for API server integration tests

use axum_test::TestServer;
use std::sync::Arc;
use stocktrix::config::Config;
use stocktrix::core::http::{create_router, AppState};
use stocktrix::metrics::Metrics;
use stocktrix::services::{MockMarketData, SnapshotSource};

pub const TEST_SEED: u64 = 42;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub config: Config,
}

impl TestApiServer {
    pub async fn new() -> Self {
        Self::with_config(Config {
            mock_seed: Some(TEST_SEED),
            ..Config::default()
        })
        .await
    }

    pub async fn with_config(config: Config) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let source: Arc<dyn SnapshotSource> =
            Arc::new(MockMarketData::seeded(config.mock_seed.unwrap_or(TEST_SEED)));
        let state = AppState::new(&config, metrics.clone(), source);

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            config,
        }
    }
}
