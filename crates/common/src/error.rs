//! Error types shared across PitchScope crates.

use std::path::PathBuf;

/// Top-level error type for PitchScope operations.
#[derive(Debug, thiserror::Error)]
pub enum PitchscopeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PitchscopeError.
pub type PitchscopeResult<T> = Result<T, PitchscopeError>;

impl PitchscopeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
