//! Transport: everyday travel plus flights
//!
//! Flights are counted per trip with a fixed average distance:
//!   - short-haul: 800 km
//!   - long-haul: 5000 km

use super::{non_negative, WEEKS_PER_YEAR};
use crate::data::EmissionFactors;
use crate::input::LifestyleInput;
use crate::utils::{lookup, lookup_or_fallback};

pub const DEFAULT_MODE_KEY: &str = "car_petrol_km";
pub const AVG_SHORT_FLIGHT_KM: f64 = 800.0;
pub const AVG_LONG_FLIGHT_KM: f64 = 5000.0;

/// Annual transport emissions (kg CO2e, unrounded)
pub fn calculate_transport(input: &LifestyleInput, factors: &EmissionFactors) -> f64 {
    let table = &factors.transport;

    let km_year = non_negative(input.km_per_week) * WEEKS_PER_YEAR;
    let mode_factor = lookup_or_fallback(table, &input.transport_mode.factor_key(), DEFAULT_MODE_KEY);
    let ground = km_year * mode_factor;

    let flights = input.flights_short_per_year as f64
        * AVG_SHORT_FLIGHT_KM
        * lookup(table, "flight_short_km")
        + input.flights_long_per_year as f64
            * AVG_LONG_FLIGHT_KM
            * lookup(table, "flight_long_km");

    ground + flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TransportMode;
    use crate::test_support::factors;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_travel_only() {
        let input = LifestyleInput {
            transport_mode: TransportMode::Train,
            km_per_week: 100.0,
            ..Default::default()
        };
        // 100 × 52 × 0.041
        assert_relative_eq!(calculate_transport(&input, &factors()), 213.2, epsilon = 1e-9);
    }

    #[test]
    fn test_flights_added() {
        let input = LifestyleInput {
            transport_mode: TransportMode::Walking,
            km_per_week: 30.0,
            flights_short_per_year: 2,
            flights_long_per_year: 1,
            ..Default::default()
        };
        // 2 × 800 × 0.255 + 1 × 5000 × 0.195
        assert_relative_eq!(calculate_transport(&input, &factors()), 1383.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_mode_uses_petrol_car() {
        let unknown = LifestyleInput {
            transport_mode: TransportMode::Unknown("hovercraft".to_string()),
            ..Default::default()
        };
        let petrol = LifestyleInput::default();
        assert_eq!(
            calculate_transport(&unknown, &factors()),
            calculate_transport(&petrol, &factors())
        );
    }

    #[test]
    fn test_negative_distance_counts_as_zero() {
        let input = LifestyleInput { km_per_week: -50.0, ..Default::default() };
        assert_eq!(calculate_transport(&input, &factors()), 0.0);
    }
}
