//! Fixed-decimal rounding
//!
//! Every figure the service reports (category emissions, totals, scores,
//! predictions) goes through `round_to`, so outputs are stable across
//! platforms for the same inputs.

/// Round `value` to `decimals` decimal places, half away from zero.
///
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    libm::round(value * scale) / scale
}

/// Clamp a score to [0, 100] and round it to one decimal place. NaN maps to 0.
pub fn clamp_unit_score(raw: f64) -> f64 {
    round_to(raw.max(0.0).min(100.0), 1)
}
