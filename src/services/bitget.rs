//! Bitget spot market client (primary provider).
//!
//! Candle payloads arrive as `{ code, msg, data }` envelopes where `data`
//! is an array of positional records, newest first.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::RetryProfile;
use crate::models::candle::Candle;
use crate::models::granularity::Granularity;
use crate::models::ticker::TickerSnapshot;
use crate::services::error::ProviderError;
use crate::services::market_data::{
    coerce_ts_ms, field_f64, parse_positional_record, CandleProvider,
};

const SUCCESS_CODE: &str = "00000";
const UNKNOWN_SYMBOL_CODE: &str = "40034";

pub struct BitgetClient {
    client: reqwest::Client,
    base_url: String,
}

impl BitgetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Unwrap the `{ code, msg, data }` envelope, classifying provider-level
    /// error codes.
    fn unwrap_envelope(body: Value) -> Result<Value, ProviderError> {
        let code = body
            .get("code")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::Malformed("missing response code".to_string()))?;
        if code == SUCCESS_CODE {
            return body
                .get("data")
                .cloned()
                .ok_or_else(|| ProviderError::Malformed("missing data field".to_string()));
        }
        let msg = body
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        let lowered = msg.to_lowercase();
        if code == UNKNOWN_SYMBOL_CODE {
            Err(ProviderError::UnknownSymbol(msg))
        } else if lowered.contains("too many requests") || lowered.contains("rate limit") {
            Err(ProviderError::RateLimited)
        } else {
            Err(ProviderError::Malformed(format!("code {code}: {msg}")))
        }
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, ProviderError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(ProviderError::Network(format!(
                "unexpected status {status} from {url}"
            )));
        }
        response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl CandleProvider for BitgetClient {
    fn name(&self) -> &'static str {
        "bitget"
    }

    fn max_limit(&self) -> usize {
        200
    }

    fn map_granularity(&self, granularity: Granularity) -> Option<&'static str> {
        match granularity {
            Granularity::Min1 => Some("1min"),
            Granularity::Min5 => Some("5min"),
            Granularity::Min15 => Some("15min"),
            Granularity::Min30 => Some("30min"),
            Granularity::Hour1 => Some("1h"),
            Granularity::Hour4 => Some("4h"),
            Granularity::Hour6 => Some("6h"),
            Granularity::Hour12 => Some("12h"),
            Granularity::Day1 => Some("1day"),
            Granularity::Week1 => Some("1week"),
            // No monthly candles on the spot endpoint.
            Granularity::Month1 => None,
        }
    }

    fn retry_profile(&self) -> RetryProfile {
        RetryProfile {
            pre_delay: (Duration::from_secs(1), Duration::from_secs(3)),
            backoff_jitter: (Duration::from_secs(1), Duration::from_secs(3)),
            rate_limit_floor: Duration::from_secs(10),
            rate_limit_jitter: (Duration::from_secs(5), Duration::from_secs(15)),
        }
    }

    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let url = format!("{}/spot/market/candles", self.base_url);
        let query = [
            ("symbol", symbol.to_uppercase()),
            ("granularity", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        debug!(symbol, interval, limit, "requesting bitget candles");
        let data = Self::unwrap_envelope(self.get_json(&url, &query).await?)?;
        let records = data
            .as_array()
            .ok_or_else(|| ProviderError::Malformed("data is not an array".to_string()))?;
        if records.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        records
            .iter()
            .map(|record| {
                let fields = record.as_array().ok_or_else(|| {
                    ProviderError::Malformed("candle record is not an array".to_string())
                })?;
                parse_positional_record(fields)
            })
            .collect()
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, ProviderError> {
        let url = format!("{}/spot/market/tickers", self.base_url);
        let symbol = symbol.to_uppercase();
        let query = [("symbol", symbol.clone())];
        let data = Self::unwrap_envelope(self.get_json(&url, &query).await?)?;

        // The endpoint answers with a list even when filtered by symbol.
        let entry = match &data {
            Value::Array(items) => items
                .iter()
                .find(|item| item.get("symbol").and_then(Value::as_str) == Some(symbol.as_str()))
                .ok_or_else(|| ProviderError::UnknownSymbol(symbol.clone()))?,
            other => other,
        };

        Ok(TickerSnapshot {
            symbol: symbol.clone(),
            last_price: field_f64(entry, "lastPr")?,
            change_24h: field_f64(entry, "change24h")?,
            change_pct_24h: field_f64(entry, "changeUtc24h")?,
            high_24h: field_f64(entry, "high24h")?,
            low_24h: field_f64(entry, "low24h")?,
            base_volume: field_f64(entry, "baseVolume")?,
            quote_volume: field_f64(entry, "quoteVolume")?,
            bid: field_f64(entry, "bidPr")?,
            ask: field_f64(entry, "askPr")?,
            open: field_f64(entry, "openUtc0")?,
            timestamp: entry
                .get("ts")
                .and_then(coerce_ts_ms)
                .unwrap_or_else(Utc::now),
        })
    }
}
