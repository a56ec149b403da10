//! Sampling without replacement from the pre-authored scenario pool.

use super::GeneratorResult;
use crate::catalog::{Scenario, POOL_CONTROL_CHOICES, POOL_RATING_RANGE, SCENARIO_POOL};
use crate::model::risk::{ControlEffectiveness, RiskRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates up to `count` records from a shuffled copy of the scenario pool.
///
/// The result length is `min(count, SCENARIO_POOL.len())`; each scenario is
/// used at most once. Ids follow the shuffled order.
pub fn generate_from_pool<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> GeneratorResult<Vec<RiskRecord>> {
    let mut pool: Vec<&Scenario> = SCENARIO_POOL.iter().collect();
    pool.shuffle(rng);

    let take = count.min(pool.len());
    if take < count {
        log::info!(
            "event=pool_capped module=generator status=ok requested={} pool_size={}",
            count,
            pool.len()
        );
    }

    let mut records = Vec::with_capacity(take);
    for (offset, scenario) in pool.into_iter().take(take).enumerate() {
        let likelihood = rng.gen_range(POOL_RATING_RANGE);
        let impact = rng.gen_range(POOL_RATING_RANGE);
        let control_exists = POOL_CONTROL_CHOICES[rng.gen_range(0..POOL_CONTROL_CHOICES.len())];
        let control_effectiveness = if control_exists {
            ControlEffectiveness::ALL.choose(rng).copied()
        } else {
            None
        };

        let record = RiskRecord {
            id: RiskRecord::format_id(offset + 1),
            name: scenario.name.to_string(),
            category: scenario.category,
            asset: scenario.asset.to_string(),
            threat: scenario.threat.to_string(),
            vulnerability: scenario.vulnerability.to_string(),
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

#[cfg(test)]
mod tests {
    use super::generate_from_pool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pool_ratings_stay_within_two_to_five() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let records = generate_from_pool(49, &mut rng).expect("generation should succeed");
        assert!(records
            .iter()
            .all(|r| (2..=5).contains(&r.likelihood) && (2..=5).contains(&r.impact)));
    }

    #[test]
    fn ids_are_sequential_after_shuffle() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let records = generate_from_pool(3, &mut rng).expect("generation should succeed");
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RISK-001", "RISK-002", "RISK-003"]);
    }
}
