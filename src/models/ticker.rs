use chrono::{DateTime, Utc};
use serde::Serialize;

/// 24h ticker snapshot for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct TickerSnapshot {
    pub symbol: String,
    pub last_price: f64,
    pub change_24h: f64,
    pub change_pct_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub bid: f64,
    pub ask: f64,
    pub open: f64,
    pub timestamp: DateTime<Utc>,
}
