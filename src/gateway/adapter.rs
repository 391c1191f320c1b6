//! Backend response translation.
//!
//! The backend wraps its result in an `output` sequence; the relay unwraps
//! the first element and re-emits its `results` in the OpenAI rerank shape.
//! Field access is explicit so a missing or mistyped key names itself in the
//! surfaced error.

use serde_json::Value;

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{RerankResponse, RerankResult};

/// Translates the backend envelope into the caller-facing response.
///
/// `model` is the caller-supplied label from the inbound request, echoed back
/// regardless of which model the backend actually ran. Result order and
/// cardinality are preserved; `document` is always null.
pub fn translate_backend_response(
    body: &Value,
    model: &str,
) -> Result<RerankResponse, GatewayError> {
    let output = body
        .get("output")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("missing or non-array `output`"))?;

    let first = output
        .first()
        .ok_or_else(|| malformed("`output` is empty, expected `output[0]`"))?;

    let entries = first
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("missing or non-array `results` in `output[0]`"))?;

    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        let relevance_score = entry
            .get("relevance_score")
            .and_then(Value::as_f64)
            .ok_or_else(|| malformed("missing or non-numeric `relevance_score` in results entry"))?;

        let index = entry
            .get("index")
            .and_then(Value::as_u64)
            .ok_or_else(|| malformed("missing or non-integer `index` in results entry"))?;

        results.push(RerankResult {
            relevance_score,
            index,
            document: None,
        });
    }

    let usage = first
        .get("usage")
        .cloned()
        .ok_or_else(|| malformed("missing `usage` in `output[0]`"))?;

    let created = chrono::Utc::now().timestamp();
    let id = match body.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => format!("proxy-{}", created),
    };

    Ok(RerankResponse {
        id,
        object: "rerank".to_string(),
        results,
        model: model.to_string(),
        usage,
        created,
    })
}

fn malformed(detail: &str) -> GatewayError {
    GatewayError::MalformedBackendData(detail.to_string())
}
