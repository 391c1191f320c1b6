use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the outbound rerank call.
pub enum BackendError {
    /// Connection failure, timeout, or non-2xx status from the backend.
    #[error("{message}")]
    Unreachable {
        /// Transport error text, surfaced to the caller.
        message: String,
    },

    /// The backend replied 2xx with a body that is not valid JSON.
    #[error("response body is not valid JSON")]
    InvalidJson,
}

impl BackendError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }
}
