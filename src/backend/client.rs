use serde_json::Value;

use super::error::BackendError;
use crate::constants::BACKEND_TIMEOUT;
use crate::gateway::payload::BackendPayload;

/// Minimal async interface used by the gateway handler.
///
/// The seam exists so handler tests can script backend behavior without a
/// network; [`HttpRerankBackend`] is the only production implementation.
pub trait RerankBackend: Send + Sync {
    /// Sends one rerank payload to `endpoint` and returns the decoded body.
    fn send(
        &self,
        endpoint: &str,
        api_key: &str,
        payload: &BackendPayload,
    ) -> impl std::future::Future<Output = Result<Value, BackendError>> + Send;
}

/// Backend client speaking JSON-over-HTTP with bearer authentication.
///
/// Holds one pooled [`reqwest::Client`] built with the fixed outbound
/// timeout; connection reuse across requests is an optimization, not part of
/// the contract.
#[derive(Debug, Clone)]
pub struct HttpRerankBackend {
    client: reqwest::Client,
}

impl HttpRerankBackend {
    /// Creates a client bounded by [`BACKEND_TIMEOUT`].
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(BACKEND_TIMEOUT).build()?;

        Ok(Self { client })
    }
}

impl RerankBackend for HttpRerankBackend {
    async fn send(
        &self,
        endpoint: &str,
        api_key: &str,
        payload: &BackendPayload,
    ) -> Result<Value, BackendError> {
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| BackendError::unreachable(e.to_string()))?
            .error_for_status()
            .map_err(|e| BackendError::unreachable(e.to_string()))?;

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                BackendError::InvalidJson
            } else {
                BackendError::unreachable(e.to_string())
            }
        })
    }
}
