//! Fixture server errors
//!
//! Converted to JSON error responses with a request id, the same shape a
//! real backend error has.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    /// Missing or wrong bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Snapshot file could not be read
    #[error("Failed to read payload {path:?}: {error}")]
    PayloadRead { path: PathBuf, error: String },

    /// Snapshot file is not an analytics payload
    #[error("Invalid payload {path:?}: {error}")]
    PayloadInvalid { path: PathBuf, error: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            FixtureError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            FixtureError::PayloadRead { .. } | FixtureError::PayloadInvalid { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PAYLOAD_ERROR")
            }
            FixtureError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::warn!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Fixture request rejected"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}
