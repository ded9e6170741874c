//! Error types for the HTTP transport.

use thiserror::Error;

/// Errors that can occur while talking to a target over HTTP.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The target could not be reached or the exchange failed midway.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
