//! Carbon Estimator - combines the five category calculators
//!
//! Each category is rounded to one decimal before summing, and the total is
//! the sum of those rounded values. Consumers that add up the breakdown
//! therefore get the reported total back.

use crate::data::EmissionFactors;
use crate::emissions::{
    calculate_diet, calculate_energy, calculate_shopping, calculate_transport, calculate_waste,
    Category, EmissionBreakdown,
};
use crate::input::LifestyleInput;
use crate::utils::round_to;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Annual footprint for one lifestyle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonEstimate {
    pub total_kg_co2_year: f64,
    pub breakdown: EmissionBreakdown,
    pub global_average_kg: f64,
    pub target_kg: f64,
    /// Percentage above (positive) or below (negative) the global average
    pub vs_global_average_pct: f64,
}

/// Estimates annual kg CO2e from lifestyle answers
#[derive(Debug, Clone)]
pub struct CarbonEstimator {
    factors: Arc<EmissionFactors>,
}

impl CarbonEstimator {
    pub fn new(factors: Arc<EmissionFactors>) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Estimate the footprint. Never fails: unknown keys fall back to
    /// default coefficients and out-of-range numbers are clamped.
    pub fn estimate(&self, input: &LifestyleInput) -> CarbonEstimate {
        let factors = self.factors.as_ref();

        let mut breakdown = EmissionBreakdown::default();
        breakdown.set(Category::Transport, round_to(calculate_transport(input, factors), 1));
        breakdown.set(Category::Energy, round_to(calculate_energy(input, factors), 1));
        breakdown.set(Category::Diet, round_to(calculate_diet(input, factors), 1));
        breakdown.set(Category::Shopping, round_to(calculate_shopping(input, factors), 1));
        breakdown.set(Category::Waste, round_to(calculate_waste(input, factors), 1));

        let total = breakdown.sum();
        let global_average = factors.global_average_annual_kg;
        let vs_global_average_pct = round_to((total - global_average) / global_average * 100.0, 1);

        tracing::debug!(
            "Estimated {:.1} kg CO2e/year ({} / {})",
            total,
            input.transport_mode.as_str(),
            input.diet_type.as_str()
        );

        CarbonEstimate {
            total_kg_co2_year: round_to(total, 1),
            breakdown,
            global_average_kg: global_average,
            target_kg: factors.target_annual_kg,
            vs_global_average_pct,
        }
    }
}
