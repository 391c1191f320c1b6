//! Relay library crate (used by the server binary and integration tests).
//!
//! The relay accepts OpenAI-style rerank requests on a single route, forwards
//! each one to a fixed inference backend, and translates the backend envelope
//! into the caller-facing response shape. Every request is an independent,
//! stateless transaction; the only shared resource is the pooled HTTP client.
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - server configuration
//! - [`RerankBackend`], [`HttpRerankBackend`], [`BackendError`] - outbound client
//! - [`HandlerState`], [`create_router_with_state`] - Axum wiring
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod backend;
pub mod config;
pub mod constants;
pub mod gateway;

pub use backend::{BackendError, HttpRerankBackend, RerankBackend};
#[cfg(any(test, feature = "mock"))]
pub use backend::MockRerankBackend;
pub use config::{Config, ConfigError};
pub use constants::{BACKEND_MODEL_ID, RELAY_STATUS_HEADER};
pub use gateway::{HandlerState, create_router_with_state};
