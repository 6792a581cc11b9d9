//! Fetch error type
//!
//! Every way the analytics request can go wrong collapses into
//! [`FetchFailure`]. The variants only exist so the log line says what
//! happened; the dashboard treats them all the same.

use thiserror::Error;

/// Failure to obtain an analytics payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// Connection refused, DNS failure, CORS rejection, etc.
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not finish within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not a valid analytics payload
    #[error("Parse error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Decode(err.to_string())
    }
}

/// Result type for analytics fetches
pub type FetchResult<T> = Result<T, FetchFailure>;
