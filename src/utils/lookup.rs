//! Factor lookup with fallback
//!
//! Unknown transport modes and diets never fail an estimate; they use the
//! coefficient of a designated default key instead.

use rustc_hash::FxHashMap;

/// Look up a mandatory key; 0.0 if absent
pub fn lookup(table: &FxHashMap<String, f64>, key: &str) -> f64 {
    table.get(key).copied().unwrap_or(0.0)
}

/// Look up `key`, falling back to `fallback_key` when `key` is absent.
///
/// The loader guarantees every fallback key is present, so the final `0.0`
/// is only reachable for tables built by hand.
pub fn lookup_or_fallback(table: &FxHashMap<String, f64>, key: &str, fallback_key: &str) -> f64 {
    table
        .get(key)
        .or_else(|| table.get(fallback_key))
        .copied()
        .unwrap_or(0.0)
}
