use std::sync::Arc;

use crate::backend::RerankBackend;
use crate::config::Config;

/// Shared per-process state handed to every request handler.
///
/// Generic over the backend seam so tests can substitute a scripted client.
#[derive(Clone)]
pub struct HandlerState<B: RerankBackend + Clone + Send + Sync + 'static> {
    /// Process-wide configuration, loaded once at startup.
    pub config: Arc<Config>,

    /// Outbound backend client, shared across requests.
    pub backend: B,
}

impl<B> HandlerState<B>
where
    B: RerankBackend + Clone + Send + Sync + 'static,
{
    pub fn new(config: Arc<Config>, backend: B) -> Self {
        Self { config, backend }
    }
}
