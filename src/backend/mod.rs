//! Outbound backend client.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{HttpRerankBackend, RerankBackend};
pub use error::BackendError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRerankBackend;
