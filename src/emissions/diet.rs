//! Diet: daily coefficient per diet type, annualized

use super::DAYS_PER_YEAR;
use crate::data::EmissionFactors;
use crate::input::LifestyleInput;
use crate::utils::lookup_or_fallback;

pub const DEFAULT_DIET_KEY: &str = "meat_medium_daily_kg_co2";

/// Annual diet emissions (kg CO2e, unrounded)
pub fn calculate_diet(input: &LifestyleInput, factors: &EmissionFactors) -> f64 {
    let daily = lookup_or_fallback(&factors.diet, &input.diet_type.factor_key(), DEFAULT_DIET_KEY);
    daily * DAYS_PER_YEAR
}
