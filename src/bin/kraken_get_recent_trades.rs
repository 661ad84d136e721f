//! Fetch recent trades for a pair via `GET /0/public/Trades`.
//!
//! Reads one JSON request from stdin and writes the reshaped trade list
//! as JSON on stdout.
//!
//! Usage:
//! ```bash
//! echo '{"pair":"XBTUSD","count":10}' | kraken-get-recent-trades
//! ```

use std::io::Read;
use std::process::ExitCode;

use kraken_tools::config::logging;
use kraken_tools::error::AppError;
use kraken_tools::kraken::trades::{self, TradesRequest};
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
    let request: TradesRequest =
        serde_json::from_str(&input).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let client = KrakenClient::new();
    let output = trades::recent_trades(&client, &request).await?;
    Ok(serde_json::to_string(&output).map_err(AppError::Encode)?)
}
