use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use reslot::engine::Engine;
use reslot::model::{Timeslot, TimeslotPool};
use reslot::wire;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("RESLOT_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    reslot::observability::init(metrics_port);

    let port = std::env::var("RESLOT_PORT").unwrap_or_else(|_| "8080".into());
    let bind = std::env::var("RESLOT_BIND").unwrap_or_else(|_| "0.0.0.0".into());

    // The pool is created once at startup and owned by the engine from then
    // on; slot order in the file is allocation order.
    let pool = match std::env::var("RESLOT_SLOTS_FILE") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let slots: Vec<Timeslot> = serde_json::from_str(&raw)?;
            info!("loaded {} timeslots from {path}", slots.len());
            TimeslotPool::new(slots)
        }
        Err(_) => {
            tracing::warn!("RESLOT_SLOTS_FILE not set, starting with an empty pool");
            TimeslotPool::default()
        }
    };

    let engine = Arc::new(Engine::new(pool));
    let app = wire::router(engine);

    let addr = format!("{bind}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("reslot listening on {addr}");
    info!(
        "  metrics: {}",
        metrics_port.map_or("disabled".to_string(), |p| format!(
            "http://0.0.0.0:{p}/metrics"
        ))
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("reslot stopped");
    Ok(())
}

/// Resolve on ctrl-c or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
}
