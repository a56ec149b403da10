//! Synthetic risk generation.
//!
//! # Responsibility
//! - Produce raw `RiskRecord` collections from static catalog data.
//! - Keep every random draw behind an explicitly seeded RNG.
//!
//! # Invariants
//! - Same variant + count + seed always yields the same sequence.
//! - `count == 0` yields an empty collection, never an error.
//! - Every emitted record passes `RiskRecord::validate()`.

mod scenario_pool;
mod weighted;

pub use scenario_pool::generate_from_pool;
pub use weighted::generate_weighted;

use crate::model::risk::{RiskCategory, RiskRecord, RiskValidationError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default record count for the weighted variant.
pub const DEFAULT_WEIGHTED_COUNT: usize = 50;
/// Default record count for the scenario-pool variant.
pub const DEFAULT_POOL_COUNT: usize = 40;
/// Default seed used by the CLI.
pub const DEFAULT_SEED: u64 = 42;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Strategy used to synthesize records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorVariant {
    /// Samples attributes per category with weighted ratings.
    #[default]
    Weighted,
    /// Samples pre-authored scenarios without replacement.
    ScenarioPool,
}

impl GeneratorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::ScenarioPool => "scenario_pool",
        }
    }

    /// Record count used when a run does not set one.
    pub fn default_count(self) -> usize {
        match self {
            Self::Weighted => DEFAULT_WEIGHTED_COUNT,
            Self::ScenarioPool => DEFAULT_POOL_COUNT,
        }
    }
}

#[derive(Debug)]
pub enum GeneratorError {
    InvalidWeights(rand::distributions::WeightedError),
    EmptyTable {
        category: RiskCategory,
        field: &'static str,
    },
    InvalidRecord(RiskValidationError),
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeights(err) => write!(f, "invalid rating weights: {err}"),
            Self::EmptyTable { category, field } => {
                write!(f, "catalog table `{field}` for category {category} is empty")
            }
            Self::InvalidRecord(err) => write!(f, "generated invalid record: {err}"),
        }
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidWeights(err) => Some(err),
            Self::EmptyTable { .. } => None,
            Self::InvalidRecord(err) => Some(err),
        }
    }
}

impl From<rand::distributions::WeightedError> for GeneratorError {
    fn from(value: rand::distributions::WeightedError) -> Self {
        Self::InvalidWeights(value)
    }
}

impl From<RiskValidationError> for GeneratorError {
    fn from(value: RiskValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Generates `count` records with a fresh RNG seeded from `seed`.
pub fn generate_risks(
    variant: GeneratorVariant,
    count: usize,
    seed: u64,
) -> GeneratorResult<Vec<RiskRecord>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let records = match variant {
        GeneratorVariant::Weighted => generate_weighted(count, &mut rng)?,
        GeneratorVariant::ScenarioPool => generate_from_pool(count, &mut rng)?,
    };
    log::debug!(
        "event=risks_generated module=generator status=ok variant={} requested={} produced={} seed={}",
        variant.as_str(),
        count,
        records.len(),
        seed
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{generate_risks, GeneratorVariant};

    #[test]
    fn variant_serializes_as_snake_case() {
        let json = serde_json::to_string(&GeneratorVariant::ScenarioPool).expect("variant should serialize");
        assert_eq!(json, "\"scenario_pool\"");
    }

    #[test]
    fn different_seeds_produce_different_sequences() {
        let first = generate_risks(GeneratorVariant::Weighted, 20, 1).expect("generation should succeed");
        let second = generate_risks(GeneratorVariant::Weighted, 20, 2).expect("generation should succeed");
        assert_ne!(first, second);
    }
}
