//! Error types shared across poslog crates.

use std::path::PathBuf;

/// Top-level error type for poslog configuration and file handling.
#[derive(Debug, thiserror::Error)]
pub enum PoslogError {
    #[error("Ignoring config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PoslogError.
pub type PoslogResult<T> = Result<T, PoslogError>;
