use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;
use crate::config::ConfigError;
use crate::constants::RELAY_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    MissingConfig(#[from] ConfigError),

    #[error("error contacting backend service: {0}")]
    BackendUnreachable(String),

    #[error("invalid JSON response from backend service")]
    InvalidBackendJson,

    #[error("failed to parse backend response, malformed data: {0}")]
    MalformedBackendData(String),
}

impl From<BackendError> for GatewayError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unreachable { message } => GatewayError::BackendUnreachable(message),
            BackendError::InvalidJson => GatewayError::InvalidBackendJson,
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, relay_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::MissingConfig(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            GatewayError::BackendUnreachable(_) => (StatusCode::BAD_GATEWAY, "backend_error"),
            GatewayError::InvalidBackendJson => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_backend_json")
            }
            GatewayError::MalformedBackendData(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_backend_data")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(RELAY_STATUS_HEADER, HeaderValue::from_static(relay_status));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
