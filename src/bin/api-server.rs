//! Stocktrix API Server
//!
//! Serves the indicator catalog and screener over HTTP, with health check
//! and Prometheus metrics endpoints. Stateless apart from a short-lived
//! report cache, so it can be horizontally scaled.

use dotenvy::dotenv;
use stocktrix::config::{get_environment, Config};
use stocktrix::core::http::start_server;
use stocktrix::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging(&get_environment());

    let config = Config::from_env();
    let port = config.port;
    info!("Starting Stocktrix API Server");
    info!(environment = %config.environment, "Environment");
    info!(
        port = port,
        score_threshold = config.thresholds.score_threshold,
        universe_size = config.universe_size,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "HTTP Server: http://0.0.0.0:{}",
        port
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
