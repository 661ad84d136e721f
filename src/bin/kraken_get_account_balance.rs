//! Fetch extended account balances via `POST /0/private/BalanceEx`.
//!
//! Takes no input; writes the per-asset balance map as JSON on stdout.
//!
//! Requires environment variables:
//! - KRAKEN_API_KEY, KRAKEN_API_SECRET (base64)

use std::process::ExitCode;

use kraken_tools::config::{logging, Credentials};
use kraken_tools::error::AppError;
use kraken_tools::kraken::balance;
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
    let client = KrakenClient::new();
    let credentials = Credentials::from_env();
    let balances = balance::account_balance(&client, &credentials).await?;
    Ok(serde_json::to_string(&balances).map_err(AppError::Encode)?)
}
