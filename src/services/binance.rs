//! Binance spot market client (secondary/fallback provider).
//!
//! Candle payloads are bare positional arrays; errors come back as
//! `{ code, msg }` bodies on non-2xx statuses.

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

const UNKNOWN_SYMBOL_CODE: i64 = -1121;

pub struct BinanceClient {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceClient {
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

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, ProviderError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            // Client errors carry a { code, msg } body worth classifying.
            let body: Value = response.json().await.unwrap_or(Value::Null);
            if body.get("code").and_then(Value::as_i64) == Some(UNKNOWN_SYMBOL_CODE) {
                let msg = body
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or("invalid symbol")
                    .to_string();
                return Err(ProviderError::UnknownSymbol(msg));
            }
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
impl CandleProvider for BinanceClient {
    fn name(&self) -> &'static str {
        "binance"
    }

    fn max_limit(&self) -> usize {
        1000
    }

    fn map_granularity(&self, granularity: Granularity) -> Option<&'static str> {
        match granularity {
            Granularity::Min1 => Some("1m"),
            Granularity::Min5 => Some("5m"),
            Granularity::Min15 => Some("15m"),
            Granularity::Min30 => Some("30m"),
            Granularity::Hour1 => Some("1h"),
            Granularity::Hour4 => Some("4h"),
            Granularity::Hour6 => Some("6h"),
            Granularity::Hour12 => Some("12h"),
            Granularity::Day1 => Some("1d"),
            Granularity::Week1 => Some("1w"),
            Granularity::Month1 => Some("1M"),
        }
    }

    fn retry_profile(&self) -> RetryProfile {
        RetryProfile {
            pre_delay: (Duration::from_millis(500), Duration::from_secs(2)),
            backoff_jitter: (Duration::from_secs(1), Duration::from_secs(2)),
            rate_limit_floor: Duration::from_secs(5),
            rate_limit_jitter: (Duration::from_secs(2), Duration::from_secs(8)),
        }
    }

    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let url = format!("{}/klines", self.base_url);
        let query = [
            ("symbol", symbol.to_uppercase()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        debug!(symbol, interval, limit, "requesting binance klines");
        let body = self.get_json(&url, &query).await?;
        let records = body
            .as_array()
            .ok_or_else(|| ProviderError::Malformed("payload is not an array".to_string()))?;
        if records.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        records
            .iter()
            .map(|record| {
                let fields = record.as_array().ok_or_else(|| {
                    ProviderError::Malformed("kline record is not an array".to_string())
                })?;
                parse_positional_record(fields)
            })
            .collect()
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, ProviderError> {
        let url = format!("{}/ticker/24hr", self.base_url);
        let symbol = symbol.to_uppercase();
        let query = [("symbol", symbol.clone())];
        let body = self.get_json(&url, &query).await?;

        Ok(TickerSnapshot {
            symbol: symbol.clone(),
            last_price: field_f64(&body, "lastPrice")?,
            change_24h: field_f64(&body, "priceChange")?,
            change_pct_24h: field_f64(&body, "priceChangePercent")?,
            high_24h: field_f64(&body, "highPrice")?,
            low_24h: field_f64(&body, "lowPrice")?,
            base_volume: field_f64(&body, "volume")?,
            quote_volume: field_f64(&body, "quoteVolume")?,
            bid: field_f64(&body, "bidPrice")?,
            ask: field_f64(&body, "askPrice")?,
            open: field_f64(&body, "openPrice")?,
            timestamp: body
                .get("closeTime")
                .and_then(coerce_ts_ms)
                .unwrap_or_else(Utc::now),
        })
    }
}
