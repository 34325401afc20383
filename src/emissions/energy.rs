//! Home energy: electricity and natural gas, reported monthly

use super::{non_negative, MONTHS_PER_YEAR};
use crate::data::EmissionFactors;
use crate::input::LifestyleInput;
use crate::utils::lookup;

/// Annual home energy emissions (kg CO2e, unrounded)
pub fn calculate_energy(input: &LifestyleInput, factors: &EmissionFactors) -> f64 {
    let table = &factors.energy;

    let electricity = non_negative(input.electricity_kwh_month)
        * MONTHS_PER_YEAR
        * lookup(table, "electricity_kwh");
    let gas = non_negative(input.natural_gas_kwh_month)
        * MONTHS_PER_YEAR
        * lookup(table, "natural_gas_kwh");

    electricity + gas
}
