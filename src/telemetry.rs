// src/telemetry.rs
//! Prometheus wiring: recorder install, `/metrics` exposition, and the
//! counters recorded by the API handlers.

use axum::{routing::get, Router};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::templates::Category;

pub struct Telemetry {
    pub handle: PrometheusHandle,
}

impl Telemetry {
    /// Install the Prometheus recorder. Call once, from the binary; tests
    /// build the API router without it and the counters become no-ops.
    pub fn init() -> Self {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Count a served enrichment by matched category.
pub fn record_request(category: Category) {
    counter!("enrich_requests_total", "category" => category.as_str()).increment(1);
}

/// Count a rejected request by error kind.
pub fn record_rejection(kind: &'static str) {
    counter!("api_errors_total", "kind" => kind).increment(1);
}
