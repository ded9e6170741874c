//! Error types for the orders populator.

use thiserror::Error;

/// Errors that end an orders run.
#[derive(Error, Debug)]
pub enum OrdersPopulatorError {
    /// Request generation error.
    #[error("Generator error: {0}")]
    Generator(#[from] loadtest_generator::GeneratorError),

    /// The target could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[from] loadtest_http::TransportError),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a status line failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
