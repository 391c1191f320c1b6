//! Test server harness.
//!
//! Spawns the relay against a scriptable stub backend so the full HTTP round
//! trip (inbound route, outbound call, translation) runs over real sockets.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use relay::backend::HttpRerankBackend;
use relay::config::Config;
use relay::gateway::{HandlerState, create_router_with_state};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

/// Relay config pointing at the given backend endpoint/credential.
pub fn relay_config(backend_endpoint: Option<String>, backend_api_key: Option<String>) -> Config {
    Config {
        backend_endpoint,
        backend_api_key,
        ..Default::default()
    }
}

/// Spawns the relay on an ephemeral port with the real HTTP backend client.
pub async fn spawn_relay_server(config: Config) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let backend =
        HttpRerankBackend::new().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let state = HandlerState::new(Arc::new(config), backend);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Scripted behavior of the stub backend for one test run.
#[derive(Clone)]
pub enum StubBehavior {
    /// Reply 200 with the given JSON body.
    Reply(Value),
    /// Reply with the given non-2xx status and a plain-text body.
    Status(u16),
    /// Reply 200 with a body that is not valid JSON.
    RawBody(&'static str),
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    hits: Arc<AtomicUsize>,
    last_authorization: Arc<Mutex<Option<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
}

/// Handle to a running stub backend, recording what the relay sent it.
pub struct StubBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    last_authorization: Arc<Mutex<Option<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StubBackend {
    /// Endpoint URL the relay should be configured with.
    pub fn endpoint(&self) -> String {
        format!("http://{}/rerank", self.addr)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn stub_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *state.last_body.lock().unwrap() = serde_json::from_str(&body).ok();

    match &state.behavior {
        StubBehavior::Reply(value) => (StatusCode::OK, Json(value.clone())).into_response(),
        StubBehavior::Status(code) => (
            StatusCode::from_u16(*code).expect("valid status code"),
            "stub backend failure",
        )
            .into_response(),
        StubBehavior::RawBody(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            (*text).to_string(),
        )
            .into_response(),
    }
}

/// Spawns a one-route backend stub on an ephemeral port.
pub async fn spawn_stub_backend(behavior: StubBehavior) -> Result<StubBackend, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let hits = Arc::new(AtomicUsize::new(0));
    let last_authorization = Arc::new(Mutex::new(None));
    let last_body = Arc::new(Mutex::new(None));

    let state = StubState {
        behavior,
        hits: hits.clone(),
        last_authorization: last_authorization.clone(),
        last_body: last_body.clone(),
    };

    let app = Router::new()
        .route("/rerank", post(stub_handler))
        .with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(StubBackend {
        addr: local_addr,
        hits,
        last_authorization,
        last_body,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
