use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::client::RerankBackend;
use super::error::BackendError;
use crate::gateway::payload::BackendPayload;

/// Scriptable in-memory backend for tests.
///
/// Records every call so tests can assert what was (or was not) sent.
#[derive(Clone)]
pub struct MockRerankBackend {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    reply: MockReply,
    calls: Vec<RecordedCall>,
}

#[derive(Clone)]
enum MockReply {
    Body(Value),
    Unreachable(String),
    InvalidJson,
}

/// One outbound call observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub api_key: String,
    pub payload: BackendPayload,
}

impl MockRerankBackend {
    /// Mock that answers every call with `body`.
    pub fn replying(body: Value) -> Self {
        Self::with_reply(MockReply::Body(body))
    }

    /// Mock that fails every call as unreachable with `message`.
    pub fn unreachable(message: &str) -> Self {
        Self::with_reply(MockReply::Unreachable(message.to_string()))
    }

    /// Mock that fails every call with a JSON decode error.
    pub fn invalid_json() -> Self {
        Self::with_reply(MockReply::InvalidJson)
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockState {
                reply,
                calls: Vec::new(),
            })),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().expect("mock state poisoned").calls.len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.inner
            .lock()
            .expect("mock state poisoned")
            .calls
            .last()
            .cloned()
    }
}

impl RerankBackend for MockRerankBackend {
    async fn send(
        &self,
        endpoint: &str,
        api_key: &str,
        payload: &BackendPayload,
    ) -> Result<Value, BackendError> {
        let mut state = self.inner.lock().expect("mock state poisoned");
        state.calls.push(RecordedCall {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            payload: payload.clone(),
        });

        match &state.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::Unreachable(message) => Err(BackendError::unreachable(message.clone())),
            MockReply::InvalidJson => Err(BackendError::InvalidJson),
        }
    }
}
