use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::engine::{Engine, EngineError};
use crate::model::Order;

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/slots", post(handle_order))
        .with_state(engine)
}

async fn handle_order(
    State(engine): State<Arc<Engine>>,
    Json(order): Json<Order>,
) -> Response {
    // Range sanity is a boundary concern: the engine assumes from <= to.
    if order.from > order.to {
        warn!(request_id = %order.request_id, "rejected order: 'from' after 'to'");
        metrics::counter!(crate::observability::ORDERS_TOTAL, "status" => "rejected").increment(1);
        return (
            StatusCode::BAD_REQUEST,
            "'from' date cannot be after 'to' date",
        )
            .into_response();
    }

    match engine.allocate(&order).await {
        Ok(()) => {
            info!(request_id = %order.request_id, capacity = order.capacity, "order fulfilled");
            (StatusCode::OK, Json(order)).into_response()
        }
        Err(err @ EngineError::InsufficientCapacity { .. }) => {
            // Over-request is the client's problem, answered as a conflict.
            // Partial reservations made during the scan stay committed.
            warn!(request_id = %order.request_id, error = %err, "order not fulfilled");
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
    }
}
