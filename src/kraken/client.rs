//! HTTP client wrapper for the Kraken REST API.
//!
//! One instance issues exactly one request per tool invocation; there is
//! no retry, timeout or connection-pooling policy beyond the reqwest
//! defaults.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{AppError, Result};
use crate::kraken::signing::{self, SignaturePayload};
use crate::kraken::types::KrakenResponse;

/// Production REST endpoint.
pub const KRAKEN_API_URL: &str = "https://api.kraken.com";

pub struct KrakenClient {
    http: Client,
    base_url: String,
}

impl KrakenClient {
    pub fn new() -> Self {
        Self::with_base_url(KRAKEN_API_URL)
    }

    /// Client against an alternate base URL; used by tests to point the
    /// tools at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET against a public endpoint. Callers build `query` so that
    /// optional request fields are omitted entirely, never sent as empty
    /// strings.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "sending public GET");
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Signed POST against a private endpoint. `body` is the exact JSON
    /// text that is both signed and sent; the two must not diverge.
    pub async fn post_private<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        credentials: &Credentials,
        body: String,
    ) -> Result<T> {
        let signature = signing::sign(
            endpoint,
            SignaturePayload::JsonText(&body),
            &credentials.api_secret,
        )?;
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "sending signed POST");
        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("API-Key", &credentials.api_key)
            .header("API-Sign", signature)
            .body(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        let envelope: KrakenResponse<T> = serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("{e}: {body}")))?;
        envelope.into_result()
    }
}

impl Default for KrakenClient {
    fn default() -> Self {
        Self::new()
    }
}
