//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, Level};

use crate::config::Config;
use crate::core::cache::ReportCache;
use crate::error::ScreenerError;
use crate::indicators::{IndicatorCategory, IndicatorDescriptor, IndicatorRegistry};
use crate::metrics::Metrics;
use crate::models::ScreenerResult;
use crate::services::{MockMarketData, SnapshotSource};
use crate::signals::{ScreenFailure, ScreenReport, Screener, ScreenerFilters, SignalEvaluator};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub screener: Arc<Screener>,
    pub source: Arc<dyn SnapshotSource>,
    pub cache: Arc<ReportCache>,
    pub universe_size: usize,
}

impl AppState {
    pub fn new(config: &Config, metrics: Arc<Metrics>, source: Arc<dyn SnapshotSource>) -> Self {
        let screener = Screener::new(SignalEvaluator::new(config.thresholds)).with_metrics(metrics.clone());
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            screener: Arc::new(screener),
            source,
            cache: Arc::new(ReportCache::new(config.cache_ttl)),
            universe_size: config.universe_size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// JSON error body with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ScreenerError> for ApiError {
    fn from(err: ScreenerError) -> Self {
        let status = match err {
            ScreenerError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            ScreenerError::MalformedSnapshot { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ScreenerError::IndicatorDefinition { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub category: IndicatorCategory,
    pub results: Vec<ScreenerResult>,
    pub failures: Vec<ScreenFailure>,
}

impl ScreenResponse {
    fn new(category: IndicatorCategory, report: ScreenReport) -> Self {
        Self {
            category,
            results: report.results,
            failures: report.failures,
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stocktrix-screener"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

async fn list_categories() -> Json<Vec<IndicatorCategory>> {
    Json(IndicatorRegistry::all_categories())
}

async fn list_indicators(Path(category): Path<String>) -> Result<Json<Vec<IndicatorDescriptor>>, ApiError> {
    let category: IndicatorCategory = category.parse()?;
    Ok(Json(IndicatorRegistry::catalog(category)))
}

/// Screen the configured universe, served from cache while fresh.
async fn screen_universe(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(filters): Query<ScreenerFilters>,
) -> Result<Json<ScreenResponse>, ApiError> {
    let category: IndicatorCategory = category.parse()?;

    let report = match state.cache.get(category).await {
        Some(report) => {
            debug!(category = %category, "Serving cached screen");
            report
        }
        None => {
            let screener = state.screener.clone();
            let source = state.source.clone();
            let limit = state.universe_size;
            let report = tokio::task::spawn_blocking(move || -> Result<ScreenReport, String> {
                let snapshots = source.fetch_snapshots(limit).map_err(|e| e.to_string())?;
                Ok(screener.screen_category(&snapshots, category))
            })
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
            .map_err(ApiError::internal)?;

            info!(
                category = %category,
                results = report.results.len(),
                failures = report.failures.len(),
                "Screen refreshed"
            );
            state.cache.insert(category, report).await
        }
    };

    let filtered = filters.apply(ScreenReport::clone(&report));
    Ok(Json(ScreenResponse::new(category, filtered)))
}

/// Screen caller-supplied snapshots. Elements are decoded one by one so a
/// bad element lands in `failures` instead of rejecting the request.
async fn screen_snapshots(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(filters): Query<ScreenerFilters>,
    Json(payload): Json<Vec<Value>>,
) -> Result<Json<ScreenResponse>, ApiError> {
    let category: IndicatorCategory = category.parse()?;
    let screener = state.screener.clone();
    let report = tokio::task::spawn_blocking(move || screener.screen_json(&payload, category))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ScreenResponse::new(category, filters.apply(report))))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/categories", get(list_categories))
        .route("/api/indicators/{category}", get(list_indicators))
        .route(
            "/api/screener/{category}",
            get(screen_universe).post(screen_snapshots),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let source: Arc<dyn SnapshotSource> = match config.mock_seed {
        Some(seed) => Arc::new(MockMarketData::seeded(seed)),
        None => Arc::new(MockMarketData::new()),
    };

    let port = config.port;
    let state = AppState::new(&config, metrics, source);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
