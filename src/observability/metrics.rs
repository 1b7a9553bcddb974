//! Metrics collection and exposition.
//!
//! # Metrics
//! - `better_tx_executions_total` (counter): chain executions by path, outcome
//! - `better_tx_execution_duration_seconds` (histogram): execute() latency by path
//! - `better_tx_sponsor_requests_total` (counter): sponsor calls by endpoint, outcome
//! - `better_tx_finality_polls_total` (counter): fullnode polls while waiting for finality
//!
//! Without an installed recorder every call is a no-op.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the terminal outcome of one chain execution.
pub fn record_execution(path: &'static str, outcome: &'static str, elapsed: Duration) {
    counter!("better_tx_executions_total", "path" => path, "outcome" => outcome).increment(1);
    histogram!("better_tx_execution_duration_seconds", "path" => path).record(elapsed.as_secs_f64());
}

/// Record one sponsor service round trip.
pub fn record_sponsor_request(endpoint: &'static str, success: bool) {
    let outcome = if success { "ok" } else { "error" };
    counter!("better_tx_sponsor_requests_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
}

pub fn record_finality_poll() {
    counter!("better_tx_finality_polls_total").increment(1);
}
