//! Shared numeric primitives used across the indicator families.

pub mod math;
