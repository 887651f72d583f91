//! Technical indicator computation.
//!
//! Each family module turns source columns into index-aligned series with
//! NaN warm-up prefixes; [`engine`] assembles the full battery.

pub mod engine;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::IndicatorEngine;
