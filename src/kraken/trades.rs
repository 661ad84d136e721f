//! Recent trades via `GET /0/public/Trades`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::kraken::client::KrakenClient;

pub const TRADES_PATH: &str = "/0/public/Trades";

/// Tool input read from stdin.
#[derive(Debug, Deserialize)]
pub struct TradesRequest {
    pub pair: String,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl TradesRequest {
    /// Query parameters; optional fields are dropped when absent.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("pair", self.pair.clone())];
        if let Some(since) = &self.since {
            query.push(("since", since.clone()));
        }
        if let Some(count) = self.count {
            query.push(("count", count.to_string()));
        }
        query
    }
}

/// Raw positional trade tuple: price, volume, unix time (fractional
/// seconds), buy/sell flag, market/limit flag, miscellaneous text and
/// trade id. A tuple of any other shape fails decoding outright.
#[derive(Debug, Deserialize)]
pub struct RawTrade(
    pub String,
    pub String,
    pub f64,
    pub String,
    pub String,
    pub String,
    pub i64,
);

/// One entry of the raw result map: either the trade list for a pair or
/// the `last` pagination cursor.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TradesEntry {
    Trades(Vec<RawTrade>),
    Cursor(String),
}

pub type RawTradesResult = HashMap<String, TradesEntry>;

#[derive(Debug, PartialEq, Serialize)]
pub struct Trade {
    pub price: String,
    pub volume: String,
    pub time: f64,
    pub buy_sell: String,
    pub market_limit: String,
    pub miscellaneous: String,
    pub trade_id: i64,
}

impl From<RawTrade> for Trade {
    fn from(raw: RawTrade) -> Self {
        let buy_sell = match raw.3.as_str() {
            "b" => "buy",
            "s" => "sell",
            _ => "unknown",
        };
        let market_limit = match raw.4.as_str() {
            "l" => "limit",
            "m" => "market",
            _ => "unknown",
        };
        Trade {
            price: raw.0,
            volume: raw.1,
            time: raw.2,
            buy_sell: buy_sell.to_string(),
            market_limit: market_limit.to_string(),
            miscellaneous: raw.5,
            trade_id: raw.6,
        }
    }
}

/// Tool output: the pagination cursor plus named-field trades per pair.
#[derive(Debug, Serialize)]
pub struct TradesOutput {
    pub last_trade_id: String,
    pub trades: HashMap<String, Vec<Trade>>,
}

/// Flatten the raw result map. The `last` cursor is required; its absence
/// means the response is malformed.
pub fn reshape(raw: RawTradesResult) -> Result<TradesOutput> {
    let mut last_trade_id = None;
    let mut trades = HashMap::new();
    for (key, entry) in raw {
        match entry {
            TradesEntry::Cursor(cursor) if key == "last" => last_trade_id = Some(cursor),
            TradesEntry::Cursor(_) => {
                return Err(AppError::Decode(format!(
                    "unexpected string value under key {key} in Trades result"
                )));
            }
            TradesEntry::Trades(list) => {
                trades.insert(key, list.into_iter().map(Trade::from).collect());
            }
        }
    }
    let last_trade_id = last_trade_id
        .ok_or_else(|| AppError::Decode("missing last cursor in Trades result".into()))?;
    Ok(TradesOutput {
        last_trade_id,
        trades,
    })
}

pub async fn recent_trades(
    client: &KrakenClient,
    request: &TradesRequest,
) -> Result<TradesOutput> {
    let raw: RawTradesResult = client.get_public(TRADES_PATH, &request.query()).await?;
    reshape(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawTradesResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reshapes_a_buy_limit_tuple() {
        let result = reshape(raw(
            r#"{"XBTUSD":[["100.0","0.5",1700000000.0,"b","l","",12345]],"last":"1700000000000000000"}"#,
        ))
        .unwrap();

        assert_eq!(result.last_trade_id, "1700000000000000000");
        assert_eq!(
            result.trades["XBTUSD"],
            vec![Trade {
                price: "100.0".into(),
                volume: "0.5".into(),
                time: 1700000000.0,
                buy_sell: "buy".into(),
                market_limit: "limit".into(),
                miscellaneous: String::new(),
                trade_id: 12345,
            }]
        );
    }

    #[test]
    fn unknown_flags_map_to_unknown() {
        let result = reshape(raw(
            r#"{"XBTUSD":[["1","1",1.0,"x","y","",1]],"last":"2"}"#,
        ))
        .unwrap();
        let trade = &result.trades["XBTUSD"][0];
        assert_eq!(trade.buy_sell, "unknown");
        assert_eq!(trade.market_limit, "unknown");
    }

    #[test]
    fn sell_market_flags_are_mapped() {
        let result = reshape(raw(
            r#"{"ETHUSD":[["2500.1","3.0",1700000001.5,"s","m","misc",7]],"last":"9"}"#,
        ))
        .unwrap();
        let trade = &result.trades["ETHUSD"][0];
        assert_eq!(trade.buy_sell, "sell");
        assert_eq!(trade.market_limit, "market");
        assert_eq!(trade.miscellaneous, "misc");
    }

    #[test]
    fn missing_last_cursor_is_a_decode_error() {
        let err = reshape(raw(r#"{"XBTUSD":[["1","1",1.0,"b","l","",1]]}"#)).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn short_tuple_fails_to_decode() {
        let result: std::result::Result<RawTrade, _> =
            serde_json::from_str(r#"["100.0","0.5",1700000000.0,"b","l"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn optional_query_fields_are_omitted_when_absent() {
        let request: TradesRequest = serde_json::from_str(r#"{"pair":"XBTUSD"}"#).unwrap();
        assert_eq!(request.query(), vec![("pair", "XBTUSD".to_string())]);

        let request: TradesRequest =
            serde_json::from_str(r#"{"pair":"XBTUSD","since":"123","count":5}"#).unwrap();
        assert_eq!(
            request.query(),
            vec![
                ("pair", "XBTUSD".to_string()),
                ("since", "123".to_string()),
                ("count", "5".to_string()),
            ]
        );
    }
}
