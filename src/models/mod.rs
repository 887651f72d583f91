//! Shared data models spanning the engine layers.

pub mod candle;
pub mod granularity;
pub mod indicators;
pub mod signal;
pub mod ticker;

pub use candle::{Candle, Series};
pub use granularity::Granularity;
pub use indicators::{
    IndicatorSet, MomentumIndicators, TrendIndicators, VolatilityIndicators, VolumeIndicators,
};
pub use signal::{Signal, SignalCategory, SignalReport};
pub use ticker::TickerSnapshot;
