//! Category-table sampling with weighted likelihood/impact.

use super::{GeneratorError, GeneratorResult};
use crate::catalog::{
    category_table, CONTROL_EXISTS_PROBABILITY, IMPACT_WEIGHTS, LIKELIHOOD_WEIGHTS, RATING_VALUES,
};
use crate::model::risk::{ControlEffectiveness, RiskCategory, RiskRecord};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on up-front allocation; larger runs grow the vector as they go.
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Generates `count` records by sampling category attribute tables.
///
/// Draw order per record is fixed (category, asset, threat, vulnerability,
/// likelihood, impact, control, effectiveness) so a seed maps to one sequence.
pub fn generate_weighted<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> GeneratorResult<Vec<RiskRecord>> {
    let likelihood_dist = WeightedIndex::new(LIKELIHOOD_WEIGHTS)?;
    let impact_dist = WeightedIndex::new(IMPACT_WEIGHTS)?;

    let mut records = Vec::with_capacity(initial_capacity(count));
    for index in 1..=count {
        let category = RiskCategory::ALL[rng.gen_range(0..RiskCategory::ALL.len())];
        let table = category_table(category);

        let asset = pick(table.assets, category, "assets", rng)?;
        let threat = pick(table.threats, category, "threats", rng)?;
        let vulnerability = pick(table.vulnerabilities, category, "vulnerabilities", rng)?;

        let likelihood = RATING_VALUES[likelihood_dist.sample(rng)];
        let impact = RATING_VALUES[impact_dist.sample(rng)];
        let control_exists = rng.gen::<f64>() < CONTROL_EXISTS_PROBABILITY;
        let control_effectiveness = if control_exists {
            ControlEffectiveness::ALL.choose(rng).copied()
        } else {
            None
        };

        let record = RiskRecord {
            id: RiskRecord::format_id(index),
            name: format!("{} impacting {}", capitalize_first(threat), asset),
            category,
            asset: asset.to_string(),
            threat: threat.to_string(),
            vulnerability: vulnerability.to_string(),
            likelihood,
            impact,
            control_exists,
            control_effectiveness,
        };
        record.validate()?;
        records.push(record);
    }

    Ok(records)
}

fn pick<R: Rng + ?Sized>(
    values: &'static [&'static str],
    category: RiskCategory,
    field: &'static str,
    rng: &mut R,
) -> GeneratorResult<&'static str> {
    values
        .choose(rng)
        .copied()
        .ok_or(GeneratorError::EmptyTable { category, field })
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn initial_capacity(count: usize) -> usize {
    count.min(MAX_PREALLOCATED_RECORDS)
}
