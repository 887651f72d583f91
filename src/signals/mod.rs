//! Signal evaluation: rule table and scoring engine.

pub mod engine;
pub mod rules;

pub use engine::SignalEngine;
pub use rules::RuleInputs;
