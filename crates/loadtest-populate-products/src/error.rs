//! Error types for the products populator.

use thiserror::Error;

/// Errors that end a products run.
#[derive(Error, Debug)]
pub enum ProductsPopulatorError {
    /// The source or the target could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[from] loadtest_http::TransportError),

    /// The catalogue answered with a non-success status.
    #[error("Catalogue at '{url}' returned status {status}")]
    SourceStatus { url: String, status: u16 },

    /// Writing a status line failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
