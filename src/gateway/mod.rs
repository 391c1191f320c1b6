//! HTTP gateway (Axum) for the rerank relay.
//!
//! This module is primarily used by the `relay` server binary.

pub mod adapter;
pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::rerank_handler;
pub use state::HandlerState;

use crate::backend::RerankBackend;
use crate::constants::{RELAY_STATUS_HEADER, RELAY_STATUS_HEALTHY};

pub fn create_router_with_state<B>(state: HandlerState<B>) -> Router
where
    B: RerankBackend + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/rerank", post(rerank_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        RELAY_STATUS_HEADER,
        HeaderValue::from_static(RELAY_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}
