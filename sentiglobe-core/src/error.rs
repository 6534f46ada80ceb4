//! Error types shared by the sentiglobe computation crates

use thiserror::Error;

/// Main error type for sentiglobe operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Scene error: {0}")]
    Scene(String),
}

/// Result type alias for sentiglobe operations
pub type Result<T> = std::result::Result<T, Error>;
