//! Lifestyle input record
//!
//! Every field has a default so partial JSON bodies are accepted. Transport
//! mode and diet are closed enums with an `Unknown` variant: an unrecognised
//! key is kept and later estimated with the default coefficient.

use serde::{Deserialize, Serialize};

/// How the user mostly travels day to day
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    CarPetrol,
    CarDiesel,
    CarElectric,
    Bus,
    Train,
    Motorcycle,
    Bicycle,
    Walking,
    Unknown(String),
}

impl TransportMode {
    pub const ALL: [TransportMode; 8] = [
        TransportMode::CarPetrol,
        TransportMode::CarDiesel,
        TransportMode::CarElectric,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Motorcycle,
        TransportMode::Bicycle,
        TransportMode::Walking,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::CarPetrol => "car_petrol",
            TransportMode::CarDiesel => "car_diesel",
            TransportMode::CarElectric => "car_electric",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Motorcycle => "motorcycle",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walking => "walking",
            TransportMode::Unknown(key) => key,
        }
    }

    /// Key of the per-km coefficient in the transport table
    pub fn factor_key(&self) -> String {
        format!("{}_km", self.as_str())
    }
}

impl Default for TransportMode {
    fn default() -> Self {
        TransportMode::CarPetrol
    }
}

impl From<String> for TransportMode {
    fn from(key: String) -> Self {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == key)
            .unwrap_or(TransportMode::Unknown(key))
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Typical diet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum DietType {
    MeatHeavy,
    MeatMedium,
    Pescatarian,
    Vegetarian,
    Vegan,
    Unknown(String),
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::MeatHeavy,
        DietType::MeatMedium,
        DietType::Pescatarian,
        DietType::Vegetarian,
        DietType::Vegan,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DietType::MeatHeavy => "meat_heavy",
            DietType::MeatMedium => "meat_medium",
            DietType::Pescatarian => "pescatarian",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::Unknown(key) => key,
        }
    }

    /// Key of the daily coefficient in the diet table
    pub fn factor_key(&self) -> String {
        format!("{}_daily_kg_co2", self.as_str())
    }
}

impl Default for DietType {
    fn default() -> Self {
        DietType::MeatMedium
    }
}

impl From<String> for DietType {
    fn from(key: String) -> Self {
        DietType::ALL
            .into_iter()
            .find(|diet| diet.as_str() == key)
            .unwrap_or(DietType::Unknown(key))
    }
}

impl From<DietType> for String {
    fn from(diet: DietType) -> Self {
        diet.as_str().to_string()
    }
}

/// Lifestyle answers used to estimate an annual footprint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifestyleInput {
    pub transport_mode: TransportMode,
    /// km travelled per week with `transport_mode`
    pub km_per_week: f64,
    pub flights_short_per_year: u32,
    pub flights_long_per_year: u32,
    pub electricity_kwh_month: f64,
    pub natural_gas_kwh_month: f64,
    pub diet_type: DietType,
    pub clothing_items_per_year: u32,
    pub electronics_per_year: u32,
    /// Share of household waste recycled, 0-100
    pub waste_recycling_pct: f64,
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::CarPetrol,
            km_per_week: 100.0,
            flights_short_per_year: 0,
            flights_long_per_year: 0,
            electricity_kwh_month: 200.0,
            natural_gas_kwh_month: 100.0,
            diet_type: DietType::MeatMedium,
            clothing_items_per_year: 10,
            electronics_per_year: 1,
            waste_recycling_pct: 30.0,
        }
    }
}
