//! Momentum indicators: RSI, stochastic, Williams %R, CCI, ROC and the
//! Ultimate Oscillator.

pub mod cci;
pub mod roc;
pub mod rsi;
pub mod stochastic;
pub mod ultimate;
pub mod williams;

pub use cci::calculate_cci;
pub use roc::calculate_roc;
pub use rsi::calculate_rsi;
pub use stochastic::{calculate_stochastic, StochasticSeries};
pub use ultimate::calculate_ultimate_oscillator;
pub use williams::calculate_williams_r;
