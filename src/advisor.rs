//! Eco Advisor - ranks the tip catalog against an emission breakdown
//!
//! Relevance of a tip = (number of categories - rank of its category) × impact
//! weight, where rank 0 is the highest-emitting category. Tips for categories
//! outside the breakdown get zero relevance. Ties keep catalog order.

use crate::data::Tip;
use crate::emissions::EmissionBreakdown;
use std::sync::Arc;

/// Tip recommender over a fixed catalog
#[derive(Debug, Clone)]
pub struct EcoAdvisor {
    tips: Arc<[Tip]>,
}

impl EcoAdvisor {
    pub fn new(tips: Arc<[Tip]>) -> Self {
        Self { tips }
    }

    /// Up to `top_n` tips, most relevant first
    pub fn recommend(&self, breakdown: &EmissionBreakdown, top_n: usize) -> Vec<&Tip> {
        let priority: Vec<&str> = breakdown
            .priority_order()
            .into_iter()
            .map(|category| category.as_str())
            .collect();

        let mut scored: Vec<(u32, &Tip)> = self
            .tips
            .iter()
            .map(|tip| (relevance(tip, &priority), tip))
            .collect();

        // Stable sort: equal relevance keeps catalog order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!(
            "Ranked {} tips, top category '{}'",
            scored.len(),
            priority.first().copied().unwrap_or("-")
        );

        scored.into_iter().take(top_n).map(|(_, tip)| tip).collect()
    }

    /// Tips whose category equals `category` exactly, in catalog order
    pub fn get_by_category(&self, category: &str) -> Vec<&Tip> {
        self.tips.iter().filter(|tip| tip.category == category).collect()
    }

    /// Full catalog in stored order
    pub fn get_all(&self) -> &[Tip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

fn relevance(tip: &Tip, priority: &[&str]) -> u32 {
    let rank = priority
        .iter()
        .position(|category| *category == tip.category)
        .unwrap_or(priority.len());
    (priority.len() - rank) as u32 * tip.impact.weight()
}
