//! Application-wide error types using thiserror
//!
//! All failures in the tools are wrapped in AppError. Every variant is
//! terminal for the process: the binary prints the Display message as its
//! diagnostic line and exits with status 1.

use thiserror::Error;

use crate::kraken::signing::SigningError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing JSON on stdin, or a required field absent.
    #[error("Invalid input, failed to decode JSON: {0}")]
    InvalidInput(String),

    /// Signature computation failed before the request was sent.
    #[error("Failed to create signature: {0}")]
    Signing(#[from] SigningError),

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(serde_json::Error),

    /// Request construction or network failure.
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Non-empty error list in the exchange response envelope.
    #[error("Kraken API error: {0:?}")]
    Exchange(Vec<String>),

    /// The ticker query matched no pairs.
    #[error("No tickers found")]
    EmptyResult,
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
