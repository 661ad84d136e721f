//! Place (or modify) a single order via `POST /0/private/AddOrder`.
//!
//! Reads one JSON request from stdin and writes the exchange result plus
//! the client correlation id as JSON on stdout.
//!
//! Usage:
//! ```bash
//! echo '{"ordertype":"limit","type":"buy","volume":"1.25","pair":"XBTUSD","price":"37500"}' \
//!     | kraken-create-order
//! ```
//!
//! Requires environment variables:
//! - KRAKEN_API_KEY, KRAKEN_API_SECRET (base64)

use std::io::Read;
use std::process::ExitCode;

use kraken_tools::config::{logging, Credentials};
use kraken_tools::error::AppError;
use kraken_tools::kraken::order::{self, OrderRequest};
use kraken_tools::KrakenClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init_logging();

    match run().await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let request: OrderRequest =
        serde_json::from_str(&input).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let client = KrakenClient::new();
    let credentials = Credentials::from_env();
    let output = order::create_order(&client, &credentials, &request).await?;
    Ok(serde_json::to_string(&output).map_err(AppError::Encode)?)
}
