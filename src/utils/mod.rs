//! Utility modules shared by the estimator and the scorer
//!
//! - Rounding: fixed-decimal rounding used for every reported value
//! - Lookup: factor lookup, optionally with a designated fallback key

pub mod rounding;
pub mod lookup;

// Re-export commonly used helpers
pub use rounding::{round_to, clamp_unit_score};
pub use lookup::{lookup, lookup_or_fallback};
