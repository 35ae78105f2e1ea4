//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Display strings double as the wire-level `error` field, so the
/// `InvalidRequest` payload is the exact client-facing text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the store layer.
    #[error("store error: {0}")]
    Store(#[from] mailbin_store::StoreError),

    /// The request is missing or has a malformed required field.
    #[error("{0}")]
    InvalidRequest(String),

    /// The push API key is missing or does not match.
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
