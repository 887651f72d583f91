//! Error taxonomy for the acquisition layer.

use std::fmt;

use crate::models::granularity::Granularity;

/// A single attempt's failure against one provider.
///
/// Everything except `UnknownSymbol` is retryable within a provider's
/// budget; none of these escape the failover fetcher except folded into the
/// terminal [`FetchError::DataUnavailable`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Connection failure, timeout, or unexpected HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 429 or a provider-specific throttle signal.
    #[error("rate limited by provider")]
    RateLimited,

    /// Well-formed payload with zero candle records.
    #[error("provider returned no records")]
    EmptyResponse,

    /// Schema or numeric coercion failure while parsing the payload.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Provider explicitly reported no such instrument.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}

impl ProviderError {
    /// Whether another attempt against the same provider can help.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ProviderError::UnknownSymbol(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ProviderError::RateLimited)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            ProviderError::RateLimited
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// What was being fetched when every provider gave up.
#[derive(Debug, Clone, Copy)]
pub enum RequestKind {
    Candles(Granularity),
    Ticker,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Candles(granularity) => write!(f, "candles {granularity}"),
            RequestKind::Ticker => f.write_str("ticker"),
        }
    }
}

/// Terminal failure of one provider, kept for the caller's diagnostics.
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub error: ProviderError,
}

/// Terminal fetch failure: every provider exhausted its retry budget.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no provider could supply {symbol} ({kind})")]
    DataUnavailable {
        symbol: String,
        kind: RequestKind,
        failures: Vec<ProviderFailure>,
    },
}
