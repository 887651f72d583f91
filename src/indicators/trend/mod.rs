//! Trend indicators: moving averages, MACD, PSAR and Ichimoku spans.

pub mod ema;
pub mod ichimoku;
pub mod macd;
pub mod psar;
pub mod sma;

pub use ema::calculate_ema;
pub use ichimoku::{calculate_ichimoku, IchimokuSeries};
pub use macd::{calculate_macd, MacdSeries};
pub use psar::{calculate_psar, PsarSeries};
pub use sma::calculate_sma;
