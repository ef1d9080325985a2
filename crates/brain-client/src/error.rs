//! Error types for the dashboard client

use thiserror::Error;

/// Failure of a single backend call.
///
/// None of these reach the user directly: each component recovers them into
/// a stale snapshot, a fallback result or a generic notice, and logs the
/// detail.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{resource} returned status {status}")]
    Status { resource: &'static str, status: u16 },

    /// The body did not have the expected shape
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
