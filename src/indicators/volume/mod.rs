//! Volume indicators: OBV, MFI, VWAP, A/D line and ease of movement.

pub mod ad;
pub mod emv;
pub mod mfi;
pub mod obv;
pub mod vwap;

pub use ad::calculate_ad_line;
pub use emv::calculate_emv;
pub use mfi::calculate_mfi;
pub use obv::calculate_obv;
pub use vwap::calculate_vwap;
