//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in feed operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The message endpoint could not be reached.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid message batch.
    ///
    /// A single malformed record (bad timestamp, missing field) rejects the
    /// whole batch; dropping individual records would corrupt counts and the
    /// grouping partition.
    #[error("Malformed message batch: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
