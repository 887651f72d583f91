//! Provider seam: one client per data source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::RetryProfile;
use crate::models::candle::Candle;
use crate::models::granularity::Granularity;
use crate::models::ticker::TickerSnapshot;
use crate::services::error::ProviderError;

/// A single data source able to serve candle batches and ticker snapshots.
///
/// Implementations issue one HTTP request per call and parse the
/// provider-specific payload shape into canonical [`Candle`]s. Retry,
/// backoff and failover live in the fetcher, not here.
#[async_trait]
pub trait CandleProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Largest candle batch the provider serves per request.
    fn max_limit(&self) -> usize;

    /// The provider's native interval token for a canonical granularity,
    /// or `None` when the provider has no equivalent.
    fn map_granularity(&self, granularity: Granularity) -> Option<&'static str>;

    /// Delay bounds tuned to this provider's throttling behavior.
    fn retry_profile(&self) -> RetryProfile;

    /// Fetch one candle batch. `interval` is the provider-native token.
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError>;

    /// Fetch the 24h ticker snapshot for one symbol.
    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, ProviderError>;
}

/// Coerce a JSON number or numeric string to f64.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Coerce a JSON number or numeric string to a millisecond timestamp.
pub(crate) fn coerce_ts_ms(value: &Value) -> Option<DateTime<Utc>> {
    let ms = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(ms)
}

/// Convert one positional candle record `[ts_ms, open, high, low, close,
/// volume, ...]` into a canonical candle. A record short on fields or
/// failing numeric coercion makes the whole attempt malformed.
pub(crate) fn parse_positional_record(record: &[Value]) -> Result<Candle, ProviderError> {
    if record.len() < 6 {
        return Err(ProviderError::Malformed(format!(
            "candle record has {} fields, expected at least 6",
            record.len()
        )));
    }
    let timestamp = coerce_ts_ms(&record[0])
        .ok_or_else(|| ProviderError::Malformed(format!("bad timestamp: {}", record[0])))?;
    let mut fields = [0.0; 5];
    for (i, slot) in fields.iter_mut().enumerate() {
        *slot = coerce_f64(&record[i + 1]).ok_or_else(|| {
            ProviderError::Malformed(format!("non-numeric candle field: {}", record[i + 1]))
        })?;
    }
    let [open, high, low, close, volume] = fields;
    Ok(Candle::new(timestamp, open, high, low, close, volume))
}

/// Keyed-field lookup with numeric coercion, for ticker payloads.
pub(crate) fn field_f64(obj: &Value, key: &str) -> Result<f64, ProviderError> {
    obj.get(key)
        .and_then(coerce_f64)
        .ok_or_else(|| ProviderError::Malformed(format!("missing or non-numeric field: {key}")))
}
