//! Error types for config loading and event replay

use thiserror::Error;

/// Errors raised outside the (infallible) overlay core
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid event on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid event on line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },
}

/// Result type for config and replay operations
pub type OverlayResult<T> = std::result::Result<T, OverlayError>;
