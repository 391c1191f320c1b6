//! Wire types for the rerank route.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound rerank request.
///
/// `model` is a caller-side label: it is echoed back in the response and
/// never forwarded to the backend. Result indices reference positions in
/// `documents`, so its order is significant.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RerankRequest {
    pub model: String,
    pub query: String,
    pub documents: Vec<String>,
}

/// Envelope posted to the backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackendPayload {
    pub input: BackendInput,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackendInput {
    pub model: String,
    pub query: String,
    pub documents: Vec<String>,
}

impl BackendPayload {
    /// Builds the outbound payload for `request` with the fixed backend model.
    pub fn from_request(request: &RerankRequest) -> Self {
        Self {
            input: BackendInput {
                model: crate::constants::BACKEND_MODEL_ID.to_string(),
                query: request.query.clone(),
                documents: request.documents.clone(),
            },
        }
    }
}

/// One scored document position in the caller-facing response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RerankResult {
    pub relevance_score: f64,
    pub index: u64,
    /// Always `null`: the relay never re-attaches source text.
    pub document: Option<String>,
}

/// Caller-facing rerank response envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RerankResponse {
    pub id: String,
    pub object: String,
    pub results: Vec<RerankResult>,
    pub model: String,
    /// Copied verbatim from the backend result.
    pub usage: Value,
    pub created: i64,
}
