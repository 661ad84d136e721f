//! Order placement via `POST /0/private/AddOrder`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Credentials;
use crate::error::{AppError, Result};
use crate::kraken::client::KrakenClient;
use crate::kraken::signing::nonce_ns;

pub const ADD_ORDER_PATH: &str = "/0/private/AddOrder";

/// Tool input read from stdin.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub ordertype: String,
    /// Order direction, `buy` or `sell` (named `type` on the wire).
    #[serde(rename = "type")]
    pub side: String,
    pub volume: String,
    pub pair: String,
    pub price: String,
    /// When set, this call modifies an existing order and reuses its
    /// correlation id instead of generating a fresh one.
    #[serde(default)]
    pub modifying_order_id: Option<String>,
}

/// Request body; its serialized JSON text is also the signed text.
#[derive(Debug, Serialize)]
struct AddOrderPayload<'a> {
    nonce: String,
    ordertype: &'a str,
    #[serde(rename = "type")]
    side: &'a str,
    volume: &'a str,
    pair: &'a str,
    price: &'a str,
    cl_ord_id: &'a str,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OrderDescription {
    #[serde(default)]
    pub order: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderResult {
    #[serde(default)]
    pub descr: OrderDescription,
    #[serde(default)]
    pub txid: Vec<String>,
}

/// Tool output: the exchange result plus the client-side correlation id,
/// echoed regardless of what the exchange itself returns.
#[derive(Debug, Serialize)]
pub struct OrderOutput {
    pub order_id: String,
    pub descr: OrderDescription,
    pub txid: Vec<String>,
}

/// Correlation id for the order: the caller's id when modifying an
/// existing order, otherwise a fresh UUID.
pub fn correlation_id(modifying_order_id: Option<&str>) -> String {
    match modifying_order_id {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    }
}

pub async fn create_order(
    client: &KrakenClient,
    credentials: &Credentials,
    request: &OrderRequest,
) -> Result<OrderOutput> {
    let order_id = correlation_id(request.modifying_order_id.as_deref());
    let payload = AddOrderPayload {
        nonce: nonce_ns().to_string(),
        ordertype: &request.ordertype,
        side: &request.side,
        volume: &request.volume,
        pair: &request.pair,
        price: &request.price,
        cl_ord_id: &order_id,
    };
    let body = serde_json::to_string(&payload).map_err(AppError::Encode)?;

    let result: OrderResult = client.post_private(ADD_ORDER_PATH, credentials, body).await?;
    Ok(OrderOutput {
        order_id,
        descr: result.descr,
        txid: result.txid,
    })
}
