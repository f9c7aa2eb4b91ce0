//! Prometheus metrics for screening and the HTTP surface.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::indicators::IndicatorCategory;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub screen_evaluations_total: IntCounterVec,
    pub screen_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let screen_evaluations_total = IntCounterVec::new(
            Opts::new(
                "screen_evaluations_total",
                "Snapshots evaluated successfully, by category",
            ),
            &["category"],
        )?;
        let screen_failures_total = IntCounterVec::new(
            Opts::new(
                "screen_failures_total",
                "Snapshots that failed evaluation, by category",
            ),
            &["category"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(screen_evaluations_total.clone()))?;
        registry.register(Box::new(screen_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            screen_evaluations_total,
            screen_failures_total,
        })
    }

    pub fn record_screen(&self, category: IndicatorCategory, evaluated: usize, failed: usize) {
        self.screen_evaluations_total
            .with_label_values(&[category.as_str()])
            .inc_by(evaluated as u64);
        self.screen_failures_total
            .with_label_values(&[category.as_str()])
            .inc_by(failed as u64);
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
