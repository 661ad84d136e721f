//! Kraken REST API plumbing shared by the command-line tools.
//!
//! `signing` and `client` carry the request mechanics; the per-endpoint
//! modules (`order`, `balance`, `trades`, `ticker`) each pair a typed
//! request with its reshaped output.

pub mod balance;
pub mod client;
pub mod order;
pub mod signing;
pub mod ticker;
pub mod trades;
pub mod types;

pub use client::{KrakenClient, KRAKEN_API_URL};
pub use signing::{sign, SignaturePayload, SigningError};
pub use types::KrakenResponse;
