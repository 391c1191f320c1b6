//! Cross-cutting, shared constants.

use std::time::Duration;

/// Response header carrying the relay's disposition for a request.
pub const RELAY_STATUS_HEADER: &str = "X-Relay-Status";

/// Header value for a request that was forwarded and translated successfully.
pub const RELAY_STATUS_FORWARDED: &str = "forwarded";

/// Header value for the liveness probe.
pub const RELAY_STATUS_HEALTHY: &str = "healthy";

/// Model identifier sent to the backend for every request.
///
/// The backend deployment serves a single reranker. The caller-supplied
/// `model` label is echoed back in the response but never forwarded.
pub const BACKEND_MODEL_ID: &str = "michaelfeil/mxbai-rerank-large-v2-seq";

/// Budget for one outbound rerank call, connection time included. No retries.
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);
