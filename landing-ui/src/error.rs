//! Error type for the metrics fetch.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Everything that can go wrong between issuing the request and holding
/// a list of agent rows. The landing page treats all variants the same way.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body is valid JSON but not an array.
    #[error("expected a JSON array of rows, got {0}")]
    NotAnArray(&'static str),

    /// A row in the array is `null`, so no cell of it can be read.
    #[error("row {0} is null")]
    NullRow(usize),
}
