//! Command-line adapters for the Kraken REST API.
//!
//! Each binary under `src/bin` is a thin adapter: it reads one JSON request
//! from stdin, issues a single call against the exchange (signed for private
//! endpoints) and writes the reshaped result as one JSON document on stdout.
//! Failures print a diagnostic line and exit nonzero.

pub mod config;
pub mod error;
pub mod kraken;

pub use error::{AppError, Result};
pub use kraken::KrakenClient;
