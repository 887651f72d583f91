//! Environment detection and immutable fetch configuration.
//!
//! Retry/backoff settings are plain values handed to the fetcher at
//! construction time; nothing here is mutated across calls.

use rand::Rng;
use std::time::Duration;

/// Deployment environment, from `APP_ENV` (default `development`).
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Fetch-layer configuration shared by all providers.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Attempts per provider before failing over.
    pub retry_count: u32,
    /// Base term of the exponential backoff (`base * 2^attempt`).
    pub base_delay: Duration,
    /// Uniform bounds of the pause between batch symbols.
    pub batch_delay: (Duration, Duration),
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    pub bitget_base_url: String,
    pub binance_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retry_count: 5,
            base_delay: Duration::from_secs(2),
            batch_delay: (Duration::from_secs(3), Duration::from_secs(6)),
            request_timeout: Duration::from_secs(30),
            bitget_base_url: "https://api.bitget.com/api/v2".to_string(),
            binance_base_url: "https://api.binance.com/api/v3".to_string(),
        }
    }
}

impl FetchConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `MARKETPULSE_RETRY_COUNT`,
    /// `MARKETPULSE_BASE_DELAY_MS`, `BITGET_BASE_URL`, `BINANCE_BASE_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let retry_count = std::env::var("MARKETPULSE_RETRY_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_count);
        let base_delay = std::env::var("MARKETPULSE_BASE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.base_delay);
        Self {
            retry_count,
            base_delay,
            batch_delay: defaults.batch_delay,
            request_timeout: defaults.request_timeout,
            bitget_base_url: std::env::var("BITGET_BASE_URL")
                .unwrap_or(defaults.bitget_base_url),
            binance_base_url: std::env::var("BINANCE_BASE_URL")
                .unwrap_or(defaults.binance_base_url),
        }
    }

    /// Sample the pause inserted between symbols of a batch fetch.
    pub fn sample_batch_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        sample_uniform(self.batch_delay, rng)
    }
}

/// Per-provider delay bounds for retries.
///
/// Providers throttle differently, so each client carries its own profile.
#[derive(Debug, Clone)]
pub struct RetryProfile {
    /// Uniform pause before every attempt after the first.
    pub pre_delay: (Duration, Duration),
    /// Uniform jitter added to the exponential backoff term.
    pub backoff_jitter: (Duration, Duration),
    /// Minimum delay after a rate-limited failure.
    pub rate_limit_floor: Duration,
    /// Uniform jitter added on top of the rate-limit floor.
    pub rate_limit_jitter: (Duration, Duration),
}

impl RetryProfile {
    /// Sample the pre-attempt pause.
    pub fn sample_pre_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        sample_uniform(self.pre_delay, rng)
    }

    /// Backoff delay for 0-indexed `attempt`: `base * 2^attempt + jitter`,
    /// raised to at least the floor (plus its own jitter) when the failure
    /// was a rate limit.
    pub fn backoff_delay<R: Rng>(
        &self,
        base: Duration,
        attempt: u32,
        rate_limited: bool,
        rng: &mut R,
    ) -> Duration {
        let exponential = base.saturating_mul(2u32.saturating_pow(attempt.min(16)));
        let delay = exponential + sample_uniform(self.backoff_jitter, rng);
        if rate_limited {
            delay.max(self.rate_limit_floor + sample_uniform(self.rate_limit_jitter, rng))
        } else {
            delay
        }
    }
}

fn sample_uniform<R: Rng>((lo, hi): (Duration, Duration), rng: &mut R) -> Duration {
    if hi <= lo {
        return lo;
    }
    Duration::from_secs_f64(rng.gen_range(lo.as_secs_f64()..=hi.as_secs_f64()))
}
