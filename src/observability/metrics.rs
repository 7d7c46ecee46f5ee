//! Metrics collection and exposition.
//!
//! # Metrics
//! - `scamazon_page_views_total` (counter): rendered pages by `page`
//! - `scamazon_not_found_total` (counter): 404 responses
//! - `scamazon_export_pages_total` (counter): exporter outcomes by `outcome`
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - The Prometheus endpoint is opt-in (`observability.metrics_enabled`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_page_view(page: &'static str) {
    metrics::counter!("scamazon_page_views_total", "page" => page).increment(1);
}

pub fn record_not_found() {
    metrics::counter!("scamazon_not_found_total").increment(1);
}

pub fn record_export_page(outcome: &'static str) {
    metrics::counter!("scamazon_export_pages_total", "outcome" => outcome).increment(1);
}
