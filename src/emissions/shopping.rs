//! Shopping: clothing and electronics bought per year

use crate::data::EmissionFactors;
use crate::input::LifestyleInput;
use crate::utils::lookup;

/// Annual shopping emissions (kg CO2e, unrounded)
pub fn calculate_shopping(input: &LifestyleInput, factors: &EmissionFactors) -> f64 {
    let table = &factors.shopping;

    input.clothing_items_per_year as f64 * lookup(table, "clothing_item")
        + input.electronics_per_year as f64
            * lookup(table, "electronics_device")
}
