//! Volatility indicators: ATR, Bollinger Bands, channel bands.

pub mod atr;
pub mod bollinger;
pub mod channels;

pub use atr::calculate_atr;
pub use bollinger::{calculate_bollinger_bands, BollingerSeries};
pub use channels::{calculate_donchian, calculate_keltner, ChannelSeries};
