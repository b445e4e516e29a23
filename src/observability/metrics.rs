//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define request metrics (count, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `trellis_requests_total` (counter): requests by method, status
//! - `trellis_request_duration_seconds` (histogram): latency distribution
//! - `trellis_routes_registered` (gauge): size of the served route table
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels stay low-cardinality: no raw paths

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();

    metrics::counter!(
        "trellis_requests_total",
        "method" => method.clone(),
        "status" => status
    )
    .increment(1);

    metrics::histogram!("trellis_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}

/// Record the number of routes the server was started with.
pub fn record_route_count(count: usize) {
    metrics::gauge!("trellis_routes_registered").set(count as f64);
}
