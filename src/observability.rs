use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: orders processed. Labels: status (ok | insufficient | rejected).
pub const ORDERS_TOTAL: &str = "reslot_orders_total";

/// Histogram: allocation scan latency in seconds.
pub const ALLOCATION_DURATION_SECONDS: &str = "reslot_allocation_duration_seconds";

/// Counter: reservation records appended to the log.
pub const RESERVATIONS_TOTAL: &str = "reslot_reservations_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
