//! Fetch ticker snapshots via `GET /0/public/Ticker`.
//!
//! Reads one JSON request from stdin (the pair filter is optional) and
//! writes the flattened ticker list as JSON on stdout. Zero matching
//! pairs is reported as a failure.
//!
//! Usage:
//! ```bash
//! echo '{"pair":"XBTUSD"}' | kraken-get-ticker
//! ```

use std::io::Read;
use std::process::ExitCode;

use kraken_tools::config::logging;
use kraken_tools::error::AppError;
use kraken_tools::kraken::ticker::{self, TickerRequest};
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
    let request: TickerRequest =
        serde_json::from_str(&input).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let client = KrakenClient::new();
    let output = ticker::ticker(&client, &request).await?;
    Ok(serde_json::to_string(&output).map_err(AppError::Encode)?)
}
