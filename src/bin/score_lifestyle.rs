//! Print footprint, score and top tips for one lifestyle
//!
//! Usage: score_lifestyle [input.json] [data_dir]
//!
//! Without an input file the example lifestyle below is scored.

use anyhow::{Context, Result};
use greenmind::{
    CarbonEstimator, DietType, EcoAdvisor, LifestyleInput, ReferenceData, SustainabilityScorer,
    TransportMode,
};

fn example_lifestyle() -> LifestyleInput {
    LifestyleInput {
        transport_mode: TransportMode::CarPetrol,
        km_per_week: 200.0,
        flights_short_per_year: 2,
        flights_long_per_year: 1,
        electricity_kwh_month: 300.0,
        natural_gas_kwh_month: 150.0,
        diet_type: DietType::MeatMedium,
        clothing_items_per_year: 15,
        electronics_per_year: 2,
        waste_recycling_pct: 40.0,
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input_path = args.next();
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());

    let input: LifestyleInput = match &input_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse lifestyle JSON")?
        }
        None => example_lifestyle(),
    };

    let reference = ReferenceData::load(&data_dir)?;
    let estimator = CarbonEstimator::new(reference.factors.clone());
    let scorer = SustainabilityScorer::new(reference.factors.clone());
    let advisor = EcoAdvisor::new(reference.tips.clone());

    let estimate = estimator.estimate(&input);
    let score = scorer.score(estimate.total_kg_co2_year, &estimate.breakdown);

    println!("\nAnnual footprint: {:.1} kg CO2e", estimate.total_kg_co2_year);
    println!("  vs global average: {:+.1}%", estimate.vs_global_average_pct);
    for (category, value) in estimate.breakdown.iter() {
        println!(
            "  {:<10} {:>9.1} kg   score {:>5.1}",
            category.label(),
            value,
            score.category_scores.get(category)
        );
    }

    println!("\nSustainability score: {:.1} ({})", score.overall_score, score.grade.as_str());
    println!("  {}", score.grade_label);

    println!("\nTop tips:");
    for tip in advisor.recommend(&estimate.breakdown, 5) {
        println!(
            "  [{}] {} (saves ~{:.0} kg/year, {})",
            tip.category, tip.text, tip.savings_kg_co2_year, tip.impact.as_str()
        );
    }
    println!();

    Ok(())
}
