//! Reference Data Loading
//!
//! Loads the emission-factor document and the eco-tip catalog once at startup.
//! Both are immutable afterwards and shared by `Arc` into the estimator, the
//! scorer and the advisor.
//!
//! Documents (under the data directory):
//!   - `emissions_factors.json`: category -> sub-key -> kg CO2e coefficient,
//!     reference constants, optional `scoring` profile
//!   - `eco_tips.json`: ordered tip catalog

use crate::error::DataError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const FACTORS_FILE: &str = "emissions_factors.json";
pub const TIPS_FILE: &str = "eco_tips.json";

/// Factor keys the estimator depends on, per category.
///
/// Transport modes and diets other than these fall back to the first key of
/// their group, so only the fallback keys are mandatory.
const REQUIRED_FACTORS: &[(&str, &[&str])] = &[
    ("transport", &["car_petrol_km", "flight_short_km", "flight_long_km"]),
    ("energy", &["electricity_kwh", "natural_gas_kwh"]),
    ("diet", &["meat_medium_daily_kg_co2"]),
    ("shopping", &["clothing_item", "electronics_device"]),
    ("waste", &["landfill_kg", "recycled_kg"]),
];

/// Emission factors and reference constants
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmissionFactors {
    /// kg CO2e per km, keyed `<mode>_km` plus `flight_short_km` / `flight_long_km`
    pub transport: FxHashMap<String, f64>,
    /// kg CO2e per kWh
    pub energy: FxHashMap<String, f64>,
    /// kg CO2e per day, keyed `<diet>_daily_kg_co2`
    pub diet: FxHashMap<String, f64>,
    /// kg CO2e per item
    pub shopping: FxHashMap<String, f64>,
    /// kg CO2e per kg of waste
    pub waste: FxHashMap<String, f64>,

    pub global_average_annual_kg: f64,
    pub target_annual_kg: f64,
    pub uk_average_annual_kg: f64,
    pub us_average_annual_kg: f64,
    pub india_average_annual_kg: f64,

    #[serde(default)]
    pub scoring: ScoringProfile,
}

/// Bounds used by the sustainability scorer
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringProfile {
    /// Annual total that scores 0 (high-consumption profile)
    pub worst_case_annual_kg: f64,
    /// Annual emissions per category that score 0 for that category
    pub category_max_kg: FxHashMap<String, f64>,
    /// Maximum used for categories missing from `category_max_kg`
    pub default_category_max_kg: f64,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        let category_max_kg = [
            ("transport", 6000.0),
            ("energy", 3000.0),
            ("diet", 2700.0),
            ("shopping", 1500.0),
            ("waste", 200.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            worst_case_annual_kg: 20000.0,
            category_max_kg,
            default_category_max_kg: 2000.0,
        }
    }
}

impl EmissionFactors {
    /// Parse and validate a factors document
    pub fn from_json(contents: &str, path: &Path) -> Result<Self, DataError> {
        let factors: EmissionFactors = serde_json::from_str(contents).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        factors.validate()?;
        Ok(factors)
    }

    /// Table for a category name as it appears in the document
    pub fn table(&self, category: &str) -> Option<&FxHashMap<String, f64>> {
        match category {
            "transport" => Some(&self.transport),
            "energy" => Some(&self.energy),
            "diet" => Some(&self.diet),
            "shopping" => Some(&self.shopping),
            "waste" => Some(&self.waste),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), DataError> {
        for &(category, keys) in REQUIRED_FACTORS {
            let table = self
                .table(category)
                .ok_or(DataError::MissingFactor { category, key: "*" })?;

            for &key in keys {
                if !table.contains_key(key) {
                    return Err(DataError::MissingFactor { category, key });
                }
            }

            for (key, &value) in table {
                if !value.is_finite() || value < 0.0 {
                    return Err(DataError::InvalidFactor { category, key: key.clone(), value });
                }
            }
        }

        if !(self.global_average_annual_kg > 0.0) {
            return Err(DataError::InvalidConstant("global_average_annual_kg"));
        }
        if !(self.target_annual_kg >= 0.0) {
            return Err(DataError::InvalidConstant("target_annual_kg"));
        }
        if !(self.scoring.worst_case_annual_kg > self.target_annual_kg) {
            return Err(DataError::InvalidConstant("scoring.worst_case_annual_kg"));
        }
        if !(self.scoring.default_category_max_kg > 0.0)
            || self.scoring.category_max_kg.values().any(|&v| !(v > 0.0))
        {
            return Err(DataError::InvalidConstant("scoring.category_max_kg"));
        }

        Ok(())
    }
}

/// Impact tier of a tip
///
/// Tiers other than high/medium/low are kept verbatim and weighted like `low`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Impact {
    High,
    Medium,
    Low,
    Other(String),
}

impl Impact {
    /// Ranking multiplier used by the advisor
    pub fn weight(&self) -> u32 {
        match self {
            Impact::High => 3,
            Impact::Medium => 2,
            Impact::Low | Impact::Other(_) => 1,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
            Impact::Other(s) => s,
        }
    }
}

impl From<String> for Impact {
    fn from(s: String) -> Self {
        match s.as_str() {
            "high" => Impact::High,
            "medium" => Impact::Medium,
            "low" => Impact::Low,
            _ => Impact::Other(s),
        }
    }
}

impl From<Impact> for String {
    fn from(impact: Impact) -> Self {
        impact.as_str().to_string()
    }
}

fn default_impact() -> Impact {
    Impact::Low
}

/// A single eco tip from the catalog
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tip {
    pub id: u32,
    pub category: String,
    #[serde(rename = "tip")]
    pub text: String,
    #[serde(default = "default_impact")]
    pub impact: Impact,
    pub savings_kg_co2_year: f64,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// All static reference data, loaded once
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub factors: Arc<EmissionFactors>,
    pub tips: Arc<[Tip]>,
}

impl ReferenceData {
    /// Load both documents from `data_dir`
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let data_dir = data_dir.as_ref();

        let factors_path = data_dir.join(FACTORS_FILE);
        let factors = EmissionFactors::from_json(&read(&factors_path)?, &factors_path)?;

        let tips_path = data_dir.join(TIPS_FILE);
        let tips: Vec<Tip> = serde_json::from_str(&read(&tips_path)?).map_err(|source| DataError::Parse {
            path: tips_path.clone(),
            source,
        })?;

        tracing::info!(
            "Loaded reference data from {:?}: {} transport factors, {} diets, {} tips",
            data_dir,
            factors.transport.len(),
            factors.diet.len(),
            tips.len()
        );

        Ok(Self::new(factors, tips))
    }

    pub fn new(factors: EmissionFactors, tips: Vec<Tip>) -> Self {
        Self {
            factors: Arc::new(factors),
            tips: tips.into(),
        }
    }
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
