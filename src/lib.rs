//! marketpulse - resilient OHLCV acquisition and technical signal scoring.
//!
//! The crate fetches candle history from public exchange REST APIs with
//! per-provider retry/backoff and cross-provider failover, computes a fixed
//! battery of technical indicators over the canonical series, and scores the
//! latest readings into a buy/sell/neutral signal report. Presentation
//! (charts, tables, menus) lives downstream of these types.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use config::FetchConfig;
pub use indicators::engine::IndicatorEngine;
pub use models::candle::{Candle, Series};
pub use models::granularity::Granularity;
pub use models::indicators::IndicatorSet;
pub use models::signal::{Signal, SignalCategory, SignalReport};
pub use services::failover::FailoverFetcher;
pub use signals::engine::SignalEngine;
