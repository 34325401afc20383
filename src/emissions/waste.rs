//! Household waste, split between recycling and landfill
//!
//! Assumes an average household producing 7 kg of waste per week. The
//! recycled share is weighted with `recycled_kg`, the rest with `landfill_kg`.

use super::{non_negative, WEEKS_PER_YEAR};
use crate::data::EmissionFactors;
use crate::input::LifestyleInput;
use crate::utils::lookup;

pub const AVG_WASTE_KG_WEEK: f64 = 7.0;

/// Annual waste emissions (kg CO2e, unrounded)
pub fn calculate_waste(input: &LifestyleInput, factors: &EmissionFactors) -> f64 {
    let table = &factors.waste;

    let recycling_share = non_negative(input.waste_recycling_pct).min(100.0) / 100.0;
    let waste_kg_year = AVG_WASTE_KG_WEEK * WEEKS_PER_YEAR;
    let recycled = waste_kg_year * recycling_share;
    let landfill = waste_kg_year * (1.0 - recycling_share);

    landfill * lookup(table, "landfill_kg")
        + recycled * lookup(table, "recycled_kg")
}
