//! Error types shared by the relay and the presentation client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching one JSON document over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, or body transfer failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body arrived but is not the JSON we expected.
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The peer answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Why a dashboard lookup could not render a card.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("quote has no numeric current price")]
    QuoteUnavailable,
}
