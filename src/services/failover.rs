//! Failover fetcher: per-provider retry with backoff, then the next
//! provider in priority order.
//!
//! All waits are `tokio::time::sleep`, so a fetch future is cancellable by
//! dropping it and time-bounded per request via the HTTP client timeout.
//! Batch fetches run strictly sequentially with an inter-symbol pause.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::{FetchConfig, RetryProfile};
use crate::models::candle::Series;
use crate::models::granularity::Granularity;
use crate::models::ticker::TickerSnapshot;
use crate::services::binance::BinanceClient;
use crate::services::bitget::BitgetClient;
use crate::services::error::{FetchError, ProviderError, ProviderFailure, RequestKind};
use crate::services::market_data::CandleProvider;

/// Non-fatal condition surfaced alongside a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchWarning {
    /// The provider lacks the requested granularity; a coarser one was used.
    GranularitySubstituted {
        provider: &'static str,
        requested: Granularity,
        substituted: Granularity,
    },
    /// The requested batch size exceeds the provider maximum.
    LimitClamped {
        provider: &'static str,
        requested: usize,
        max: usize,
    },
}

impl fmt::Display for FetchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchWarning::GranularitySubstituted {
                provider,
                requested,
                substituted,
            } => write!(
                f,
                "{provider} does not support {requested}, substituted {substituted}"
            ),
            FetchWarning::LimitClamped {
                provider,
                requested,
                max,
            } => write!(f, "{provider} clamps limit {requested} to {max}"),
        }
    }
}

/// A successful fetch: the canonical series, which provider served it, and
/// any substitutions made along the way.
#[derive(Debug)]
pub struct FetchOutcome {
    pub series: Series,
    pub provider: &'static str,
    pub warnings: Vec<FetchWarning>,
}

/// One failed symbol of a batch fetch.
#[derive(Debug)]
pub struct BatchFailure {
    pub symbol: String,
    pub error: FetchError,
}

/// Batch fetch summary: per-symbol outcomes plus skipped symbols.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub fetched: Vec<FetchOutcome>,
    pub failed: Vec<BatchFailure>,
}

/// Orchestrates provider clients in priority order.
///
/// Retry and delay settings come from an immutable [`FetchConfig`] captured
/// at construction; nothing is mutated between calls.
pub struct FailoverFetcher {
    providers: Vec<Arc<dyn CandleProvider>>,
    config: FetchConfig,
}

impl FailoverFetcher {
    /// Bitget primary, Binance fallback — the default provider order.
    pub fn from_config(config: FetchConfig) -> Result<Self, ProviderError> {
        let bitget = BitgetClient::new(&config.bitget_base_url, config.request_timeout)?;
        let binance = BinanceClient::new(&config.binance_base_url, config.request_timeout)?;
        Ok(Self::with_providers(
            vec![Arc::new(bitget), Arc::new(binance)],
            config,
        ))
    }

    /// Custom provider list, tried in the given order.
    pub fn with_providers(providers: Vec<Arc<dyn CandleProvider>>, config: FetchConfig) -> Self {
        Self { providers, config }
    }

    /// Fetch one candle series, retrying and failing over as needed.
    ///
    /// Returns the first provider's successful series; after every provider
    /// exhausts its budget, the terminal [`FetchError::DataUnavailable`].
    pub async fn fetch(
        &self,
        symbol: &str,
        granularity: Granularity,
        limit: usize,
    ) -> Result<FetchOutcome, FetchError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            let mut warnings = Vec::new();

            let Some((interval, effective)) = resolve_granularity(provider.as_ref(), granularity)
            else {
                warn!(provider = name, %granularity, "no supported granularity, skipping provider");
                failures.push(ProviderFailure {
                    provider: name,
                    error: ProviderError::Malformed(format!(
                        "no granularity mapping for {granularity} or coarser"
                    )),
                });
                continue;
            };
            if effective != granularity {
                warn!(provider = name, requested = %granularity, substituted = %effective,
                    "granularity substituted");
                warnings.push(FetchWarning::GranularitySubstituted {
                    provider: name,
                    requested: granularity,
                    substituted: effective,
                });
            }

            let capped = limit.min(provider.max_limit());
            if capped < limit {
                warnings.push(FetchWarning::LimitClamped {
                    provider: name,
                    requested: limit,
                    max: provider.max_limit(),
                });
            }

            let profile = provider.retry_profile();
            let attempt = || provider.fetch_candles(symbol, interval, capped);
            match self.run_with_retries(name, &profile, attempt).await {
                Ok(bars) => {
                    let series = Series::new(symbol, effective, bars);
                    info!(provider = name, symbol, bars = series.len(), "series fetched");
                    return Ok(FetchOutcome {
                        series,
                        provider: name,
                        warnings,
                    });
                }
                Err(error) => {
                    warn!(provider = name, symbol, %error, "provider exhausted, failing over");
                    failures.push(ProviderFailure {
                        provider: name,
                        error,
                    });
                }
            }
        }

        Err(FetchError::DataUnavailable {
            symbol: symbol.to_string(),
            kind: RequestKind::Candles(granularity),
            failures,
        })
    }

    /// Fetch a 24h ticker snapshot through the same retry/failover policy.
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, FetchError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            let profile = provider.retry_profile();
            let attempt = || provider.fetch_ticker(symbol);
            match self.run_with_retries(name, &profile, attempt).await {
                Ok(ticker) => {
                    info!(provider = name, symbol, "ticker fetched");
                    return Ok(ticker);
                }
                Err(error) => {
                    warn!(provider = name, symbol, %error, "provider exhausted, failing over");
                    failures.push(ProviderFailure {
                        provider: name,
                        error,
                    });
                }
            }
        }

        Err(FetchError::DataUnavailable {
            symbol: symbol.to_string(),
            kind: RequestKind::Ticker,
            failures,
        })
    }

    /// Fetch several symbols sequentially, pausing between symbols to
    /// respect aggregate rate limits. A symbol that ends in
    /// `DataUnavailable` is recorded and the batch continues.
    pub async fn fetch_many(
        &self,
        symbols: &[&str],
        granularity: Granularity,
        limit: usize,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (i, symbol) in symbols.iter().enumerate() {
            match self.fetch(symbol, granularity, limit).await {
                Ok(fetched) => outcome.fetched.push(fetched),
                Err(error) => {
                    warn!(symbol, %error, "symbol skipped in batch");
                    outcome.failed.push(BatchFailure {
                        symbol: symbol.to_string(),
                        error,
                    });
                }
            }
            if i + 1 < symbols.len() {
                sleep(self.config.sample_batch_delay(&mut rand::thread_rng())).await;
            }
        }

        info!(
            fetched = outcome.fetched.len(),
            failed = outcome.failed.len(),
            "batch fetch complete"
        );
        outcome
    }

    /// Run one provider operation under the retry budget.
    ///
    /// Every attempt after the first is preceded by a jittered pause; a
    /// retryable failure backs off exponentially, with the rate-limit floor
    /// applied when the provider throttled us. `UnknownSymbol` aborts the
    /// provider immediately.
    async fn run_with_retries<T, F, Fut>(
        &self,
        provider: &'static str,
        profile: &RetryProfile,
        op: F,
    ) -> Result<T, ProviderError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let retry_count = self.config.retry_count.max(1);
        let mut last_error = ProviderError::EmptyResponse;

        for attempt in 0..retry_count {
            if attempt > 0 {
                sleep(profile.sample_pre_delay(&mut rand::thread_rng())).await;
            }

            match op().await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    warn!(provider, attempt = attempt + 1, retry_count, %error, "attempt failed");
                    if !error.is_retryable() {
                        return Err(error);
                    }
                    let rate_limited = error.is_rate_limited();
                    last_error = error;
                    if attempt + 1 < retry_count {
                        let delay = profile.backoff_delay(
                            self.config.base_delay,
                            attempt,
                            rate_limited,
                            &mut rand::thread_rng(),
                        );
                        sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error)
    }
}

/// Map a canonical granularity onto a provider token, walking coarser until
/// the provider supports one.
pub fn resolve_granularity(
    provider: &dyn CandleProvider,
    requested: Granularity,
) -> Option<(&'static str, Granularity)> {
    let mut current = requested;
    loop {
        if let Some(token) = provider.map_granularity(current) {
            return Some((token, current));
        }
        current = current.coarser()?;
    }
}
