//! Market data acquisition: provider clients and the failover fetcher.

pub mod binance;
pub mod bitget;
pub mod error;
pub mod failover;
pub mod market_data;

pub use binance::BinanceClient;
pub use bitget::BitgetClient;
pub use error::{FetchError, ProviderError, ProviderFailure, RequestKind};
pub use failover::{
    resolve_granularity, BatchFailure, BatchOutcome, FailoverFetcher, FetchOutcome, FetchWarning,
};
pub use market_data::CandleProvider;
