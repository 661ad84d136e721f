//! Extended account balances via `POST /0/private/BalanceEx`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::{AppError, Result};
use crate::kraken::client::KrakenClient;
use crate::kraken::signing::nonce_ns;

pub const BALANCE_PATH: &str = "/0/private/BalanceEx";

/// Extended balance for a single asset. Fields the exchange omits stay
/// out of the output as well.
#[derive(Debug, Deserialize, Serialize)]
pub struct AssetBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_trade: Option<String>,
}

#[derive(Serialize)]
struct BalancePayload {
    nonce: String,
}

/// This tool takes no input: the payload is the nonce alone.
pub async fn account_balance(
    client: &KrakenClient,
    credentials: &Credentials,
) -> Result<HashMap<String, AssetBalance>> {
    let payload = BalancePayload {
        nonce: nonce_ns().to_string(),
    };
    let body = serde_json::to_string(&payload).map_err(AppError::Encode)?;
    client.post_private(BALANCE_PATH, credentials, body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_output() {
        let balance: AssetBalance =
            serde_json::from_str(r#"{"balance":"1234.56","hold_trade":"12.5"}"#).unwrap();
        let rendered = serde_json::to_string(&balance).unwrap();
        assert_eq!(rendered, r#"{"balance":"1234.56","hold_trade":"12.5"}"#);
    }
}
