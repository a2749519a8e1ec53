//! Error-to-response mapping for the web layer
//!
//! Every lookup failure is collapsed to `404 {"error": message}`,
//! whatever its cause. The error granularity question (400 for bad
//! input, 502 for upstream failure) is recorded in DESIGN.md; until that
//! is settled the wire contract stays as it has always been.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
