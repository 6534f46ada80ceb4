//! Error types for the data-fetch boundary

use thiserror::Error;

/// Errors that can occur while fetching or decoding sentiment data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sentiment endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for data operations
pub type Result<T> = std::result::Result<T, DataError>;
