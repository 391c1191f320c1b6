use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, instrument};

use crate::backend::RerankBackend;
use crate::constants::{RELAY_STATUS_FORWARDED, RELAY_STATUS_HEADER};
use crate::gateway::adapter::translate_backend_response;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{BackendPayload, RerankRequest};
use crate::gateway::state::HandlerState;

/// Handles `POST /rerank`: validate, check configuration, forward once,
/// translate. Every request is an independent, stateless transaction.
#[instrument(skip(state, request), fields(model = tracing::field::Empty))]
pub async fn rerank_handler<B>(
    State(state): State<HandlerState<B>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    B: RerankBackend + Clone + Send + Sync + 'static,
{
    let request: RerankRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {}", e)))?;
    tracing::Span::current().record("model", tracing::field::display(&request.model));

    // Configuration gate: fail before touching the network.
    let (endpoint, api_key) = state.config.backend_settings()?;

    let payload = BackendPayload::from_request(&request);

    debug!(
        documents = request.documents.len(),
        "forwarding rerank request"
    );

    let body = state
        .backend
        .send(endpoint, api_key, &payload)
        .await
        .map_err(|e| {
            error!(error = %e, "backend rerank call failed");
            GatewayError::from(e)
        })?;

    let response = translate_backend_response(&body, &request.model)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        RELAY_STATUS_HEADER,
        HeaderValue::from_static(RELAY_STATUS_FORWARDED),
    );
    Ok((StatusCode::OK, headers, Json(response)).into_response())
}
