//! Emission category calculators
//!
//! Each category is implemented in its own module and returns the raw
//! (unrounded) annual kg CO2e. Rounding and summation happen in the estimator.

pub mod transport;
pub mod energy;
pub mod diet;
pub mod shopping;
pub mod waste;

// Re-export category functions
pub use transport::calculate_transport;
pub use energy::calculate_energy;
pub use diet::calculate_diet;
pub use shopping::calculate_shopping;
pub use waste::calculate_waste;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Negative and non-finite quantities count as zero
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// The five fixed emission categories, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Transport,
    Energy,
    Diet,
    Shopping,
    Waste,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Energy,
        Category::Diet,
        Category::Shopping,
        Category::Waste,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Diet => "diet",
            Category::Shopping => "shopping",
            Category::Waste => "waste",
        }
    }

    /// Display label used by the dashboard
    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Energy => "Energy",
            Category::Diet => "Diet",
            Category::Shopping => "Shopping",
            Category::Waste => "Waste",
        }
    }

    /// Chart colour used by the dashboard
    pub fn color(self) -> &'static str {
        match self {
            Category::Transport => "#22c55e",
            Category::Energy => "#86efac",
            Category::Diet => "#4ade80",
            Category::Shopping => "#16a34a",
            Category::Waste => "#15803d",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Annual kg CO2e per category
///
/// Always holds exactly the five categories. Serializes as a JSON object in
/// `Category::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmissionBreakdown {
    values: [f64; 5],
}

impl EmissionBreakdown {
    pub fn new(transport: f64, energy: f64, diet: f64, shopping: f64, waste: f64) -> Self {
        Self { values: [transport, energy, diet, shopping, waste] }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: Category, value: f64) {
        self.values[category.index()] = value;
    }

    /// (category, value) pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of the category values, in reporting order
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Categories sorted by descending emissions; equal values keep reporting order
    pub fn priority_order(&self) -> Vec<Category> {
        let mut order = Category::ALL.to_vec();
        order.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        order
    }
}

impl Serialize for EmissionBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.as_str(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EmissionBreakdown {
    /// Missing categories read as zero; names outside the five categories are ignored
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        let mut breakdown = EmissionBreakdown::default();
        for (name, value) in raw {
            if let Some(category) = Category::from_name(&name) {
                breakdown.set(category, value);
            }
        }
        Ok(breakdown)
    }
}
