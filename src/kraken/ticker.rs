//! Ticker snapshots via `GET /0/public/Ticker`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::kraken::client::KrakenClient;

pub const TICKER_PATH: &str = "/0/public/Ticker";

/// Tool input read from stdin. Without a pair the exchange returns every
/// tradable pair.
#[derive(Debug, Deserialize)]
pub struct TickerRequest {
    #[serde(default)]
    pub pair: Option<String>,
}

/// Raw per-pair ticker: parallel arrays indexed `[today, last24h]`, with
/// a third lot-volume slot on the ask/bid quotes. Fixed-size arrays make
/// a short array a decode error rather than a late panic.
#[derive(Debug, Deserialize)]
pub struct RawTicker {
    #[serde(rename = "a")]
    pub ask: [String; 3],
    #[serde(rename = "b")]
    pub bid: [String; 3],
    #[serde(rename = "c")]
    pub last: [String; 2],
    #[serde(rename = "v")]
    pub volume: [String; 2],
    #[serde(rename = "p")]
    pub vwap: [String; 2],
    #[serde(rename = "t")]
    pub trades: [u64; 2],
    #[serde(rename = "l")]
    pub low: [String; 2],
    #[serde(rename = "h")]
    pub high: [String; 2],
    #[serde(rename = "o")]
    pub opening_price: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthQuote {
    pub price: String,
    pub whole_lot_volume: String,
    pub lot_volume: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseQuote {
    pub price: String,
    pub lot_volume: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DaySpan {
    pub today: String,
    #[serde(rename = "last24h")]
    pub last_24h: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DaySpanCount {
    pub today: u64,
    #[serde(rename = "last24h")]
    pub last_24h: u64,
}

/// Flattened per-pair ticker with named subfields.
#[derive(Debug, PartialEq, Serialize)]
pub struct TickerSummary {
    pub pair: String,
    pub ask: DepthQuote,
    pub bid: DepthQuote,
    pub last: CloseQuote,
    pub volume: DaySpan,
    #[serde(rename = "volumeWeightedAveragePrice")]
    pub vwap: DaySpan,
    pub trades: DaySpanCount,
    pub low: DaySpan,
    pub high: DaySpan,
    #[serde(rename = "openingPrice")]
    pub opening_price: String,
}

impl TickerSummary {
    fn from_raw(pair: String, raw: RawTicker) -> Self {
        let [ask_price, ask_whole_lot, ask_lot] = raw.ask;
        let [bid_price, bid_whole_lot, bid_lot] = raw.bid;
        let [last_price, last_lot] = raw.last;
        let [volume_today, volume_24h] = raw.volume;
        let [vwap_today, vwap_24h] = raw.vwap;
        let [trades_today, trades_24h] = raw.trades;
        let [low_today, low_24h] = raw.low;
        let [high_today, high_24h] = raw.high;

        TickerSummary {
            pair,
            ask: DepthQuote {
                price: ask_price,
                whole_lot_volume: ask_whole_lot,
                lot_volume: ask_lot,
            },
            bid: DepthQuote {
                price: bid_price,
                whole_lot_volume: bid_whole_lot,
                lot_volume: bid_lot,
            },
            last: CloseQuote {
                price: last_price,
                lot_volume: last_lot,
            },
            volume: DaySpan {
                today: volume_today,
                last_24h: volume_24h,
            },
            vwap: DaySpan {
                today: vwap_today,
                last_24h: vwap_24h,
            },
            trades: DaySpanCount {
                today: trades_today,
                last_24h: trades_24h,
            },
            low: DaySpan {
                today: low_today,
                last_24h: low_24h,
            },
            high: DaySpan {
                today: high_today,
                last_24h: high_24h,
            },
            opening_price: raw.opening_price,
        }
    }
}

/// Flatten the raw map into a list sorted by pair for deterministic
/// output. Zero tickers is a failure, not an empty success.
pub fn reshape(raw: HashMap<String, RawTicker>) -> Result<Vec<TickerSummary>> {
    if raw.is_empty() {
        return Err(AppError::EmptyResult);
    }
    let mut tickers: Vec<TickerSummary> = raw
        .into_iter()
        .map(|(pair, ticker)| TickerSummary::from_raw(pair, ticker))
        .collect();
    tickers.sort_by(|a, b| a.pair.cmp(&b.pair));
    Ok(tickers)
}

pub async fn ticker(
    client: &KrakenClient,
    request: &TickerRequest,
) -> Result<Vec<TickerSummary>> {
    let mut query = Vec::new();
    if let Some(pair) = &request.pair {
        query.push(("pair", pair.clone()));
    }
    let raw: HashMap<String, RawTicker> = client.get_public(TICKER_PATH, &query).await?;
    reshape(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_XBTUSD: &str = r#"{
        "a": ["100.5", "1", "2"],
        "b": ["100.1", "3", "4"],
        "c": ["100.3", "0.05"],
        "v": ["1500.0", "3200.5"],
        "p": ["100.2", "99.8"],
        "t": [420, 990],
        "l": ["98.0", "97.5"],
        "h": ["101.0", "102.3"],
        "o": "99.9"
    }"#;

    fn raw_map(json: &str) -> HashMap<String, RawTicker> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flattens_parallel_arrays_into_named_fields() {
        let tickers = reshape(raw_map(&format!(r#"{{"XBTUSD":{RAW_XBTUSD}}}"#))).unwrap();
        assert_eq!(tickers.len(), 1);

        let ticker = &tickers[0];
        assert_eq!(ticker.pair, "XBTUSD");
        assert_eq!(ticker.ask.price, "100.5");
        assert_eq!(ticker.ask.whole_lot_volume, "1");
        assert_eq!(ticker.ask.lot_volume, "2");
        assert_eq!(ticker.last.price, "100.3");
        assert_eq!(ticker.volume.last_24h, "3200.5");
        assert_eq!(ticker.trades.today, 420);
        assert_eq!(ticker.opening_price, "99.9");
    }

    #[test]
    fn output_uses_camel_case_field_names() {
        let tickers = reshape(raw_map(&format!(r#"{{"XBTUSD":{RAW_XBTUSD}}}"#))).unwrap();
        let rendered = serde_json::to_string(&tickers).unwrap();
        assert!(rendered.contains(r#""wholeLotVolume":"1""#));
        assert!(rendered.contains(r#""volumeWeightedAveragePrice""#));
        assert!(rendered.contains(r#""last24h""#));
        assert!(rendered.contains(r#""openingPrice":"99.9""#));
    }

    #[test]
    fn tickers_are_sorted_by_pair() {
        let tickers = reshape(raw_map(&format!(
            r#"{{"XBTUSD":{RAW_XBTUSD},"ETHUSD":{RAW_XBTUSD}}}"#
        )))
        .unwrap();
        assert_eq!(tickers[0].pair, "ETHUSD");
        assert_eq!(tickers[1].pair, "XBTUSD");
    }

    #[test]
    fn zero_tickers_is_a_failure() {
        assert!(matches!(reshape(HashMap::new()), Err(AppError::EmptyResult)));
    }

    #[test]
    fn short_quote_array_fails_to_decode() {
        let result: std::result::Result<RawTicker, _> = serde_json::from_str(
            r#"{"a":["100.5","1"],"b":["100.1","3","4"],"c":["1","1"],"v":["1","1"],
                "p":["1","1"],"t":[1,1],"l":["1","1"],"h":["1","1"],"o":"1"}"#,
        );
        assert!(result.is_err());
    }
}
