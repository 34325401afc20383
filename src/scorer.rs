//! Sustainability Scorer - 0-100 score, letter grade and per-category scores
//!
//! Overall score is linear between the target footprint (100) and the
//! worst-case footprint (0). Category scores use a fixed maximum per category
//! from the scoring profile.

use crate::data::EmissionFactors;
use crate::emissions::{Category, EmissionBreakdown};
use crate::utils::clamp_unit_score;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

/// Minimum overall score per grade, highest first. The last entry starts at
/// 0 so every score in [0, 100] gets a grade.
pub const GRADE_THRESHOLDS: [(f64, Grade); 6] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (55.0, Grade::C),
    (40.0, Grade::D),
    (0.0, Grade::F),
];

impl Grade {
    /// Grade for an overall score; scores below 0 grade as F
    pub fn from_score(score: f64) -> Grade {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "Exceptional – you're a sustainability champion!",
            Grade::A => "Excellent – well above average sustainability.",
            Grade::B => "Good – you're making a positive impact.",
            Grade::C => "Average – room for meaningful improvement.",
            Grade::D => "Below average – consider some key lifestyle changes.",
            Grade::F => "Needs work – your footprint is significantly above targets.",
        }
    }
}

/// Score result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub grade: Grade,
    pub grade_label: String,
    /// 0-100 per category, HIGH = GOOD
    pub category_scores: EmissionBreakdown,
}

/// Sustainability scorer
#[derive(Debug, Clone)]
pub struct SustainabilityScorer {
    factors: Arc<EmissionFactors>,
}

impl SustainabilityScorer {
    pub fn new(factors: Arc<EmissionFactors>) -> Self {
        Self { factors }
    }

    /// Score an annual total and its breakdown
    pub fn score(&self, total_kg_co2: f64, breakdown: &EmissionBreakdown) -> ScoreResult {
        let overall_score = self.overall_score(total_kg_co2);

        let mut category_scores = EmissionBreakdown::default();
        for (category, value) in breakdown.iter() {
            category_scores.set(category, self.category_score(category, value));
        }

        let grade = Grade::from_score(overall_score);

        ScoreResult {
            overall_score,
            grade,
            grade_label: grade.label().to_string(),
            category_scores,
        }
    }

    /// 100 at or below target, 0 at or above worst case. A NaN total scores 0.
    pub fn overall_score(&self, total_kg_co2: f64) -> f64 {
        let target = self.factors.target_annual_kg;
        let worst_case = self.factors.scoring.worst_case_annual_kg;

        // Profile with no room between target and worst case: pass/fail
        if !(worst_case > target) {
            return if total_kg_co2 <= target { 100.0 } else { 0.0 };
        }

        // f64::min/max drop a NaN operand, so NaN lands on worst_case
        let clamped = total_kg_co2.min(worst_case).max(target);
        let raw = 100.0 * (1.0 - (clamped - target) / (worst_case - target));
        clamp_unit_score(raw)
    }

    /// 100 at zero emissions, 0 at or above the category maximum
    pub fn category_score(&self, category: Category, value: f64) -> f64 {
        let cat_max = self.category_max(category);
        let raw = 100.0 * (1.0 - value.min(cat_max) / cat_max);
        clamp_unit_score(raw)
    }

    fn category_max(&self, category: Category) -> f64 {
        let profile = &self.factors.scoring;
        profile
            .category_max_kg
            .get(category.as_str())
            .copied()
            .unwrap_or(profile.default_category_max_kg)
    }
}
