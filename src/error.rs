//! Error types for monsterdex.
//!
//! Library code returns [`MonsterdexError`]; the CLI wraps it in `anyhow`.
//! Corrupt stored values never surface here: they are recovered in
//! [`crate::storage::load_json`] by treating the value as absent.

use thiserror::Error;

/// Errors produced by the monsterdex library.
#[derive(Debug, Error)]
pub enum MonsterdexError {
    /// Transport-level failure talking to the monster API (connect, timeout,
    /// body decode).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The monster API answered with a non-success status.
    #[error("API request to {url} failed with status {status}")]
    Api { status: u16, url: String },

    /// The key-value store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A caller passed a record that cannot be stored.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MonsterdexError {
    /// Returns `true` for failures caused by the remote API or the network.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. })
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, MonsterdexError>;
