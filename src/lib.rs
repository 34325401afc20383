//! GreenMind Rust Implementation
//!
//! Lifestyle carbon-footprint estimation, sustainability scoring, eco-tip
//! ranking and energy-usage prediction behind an Axum HTTP API.
//!
//! Module layout:
//! - `data`: Reference tables (emission factors, scoring profile, tip catalog)
//! - `emissions/`: One calculator per emission category
//! - `estimator`: Combines the category calculators into a rounded breakdown
//! - `scorer`: 0-100 sustainability score and letter grade
//! - `advisor`: Tip ranking against a breakdown
//! - `predictor/`: Regression model artifact and its two-state loader
//! - `api_server`: Router, handlers and request validation (feature `api`)

pub mod utils;
pub mod error;
pub mod config;
pub mod data;
pub mod input;
pub mod emissions;
pub mod estimator;
pub mod scorer;
pub mod advisor;
pub mod predictor;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use data::{EmissionFactors, Impact, ReferenceData, ScoringProfile, Tip};
pub use input::{DietType, LifestyleInput, TransportMode};
pub use emissions::{Category, EmissionBreakdown};
pub use estimator::{CarbonEstimate, CarbonEstimator};
pub use scorer::{Grade, ScoreResult, SustainabilityScorer};
pub use advisor::EcoAdvisor;
pub use predictor::{EnergyPredictor, PredictorState, RegressionModel};
pub use error::{ConfigError, DataError, PredictError, ValidationError};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::{EmissionFactors, ReferenceData, Tip};
    use std::path::Path;

    pub fn factors() -> EmissionFactors {
        EmissionFactors::from_json(
            include_str!("../data/emissions_factors.json"),
            Path::new("data/emissions_factors.json"),
        )
        .expect("shipped factors are valid")
    }

    pub fn tips() -> Vec<Tip> {
        serde_json::from_str(include_str!("../data/eco_tips.json")).expect("shipped tips are valid")
    }

    pub fn reference_data() -> ReferenceData {
        ReferenceData::new(factors(), tips())
    }
}
