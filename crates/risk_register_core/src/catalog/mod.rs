//! Static reference data for risk synthesis.
//!
//! # Responsibility
//! - Hold category attribute tables and the pre-authored scenario pool.
//! - Hold sampling constants shared by generator variants.
//!
//! # Invariants
//! - All tables are immutable `static` data; nothing here is mutated at runtime.
//! - Every category table and the scenario pool are non-empty.

mod categories;
mod scenarios;

pub use categories::{category_table, CategoryTable, CATEGORY_TABLES};
pub use scenarios::{Scenario, SCENARIO_POOL};

/// Rating values sampled for likelihood and impact.
pub const RATING_VALUES: [u8; 5] = [1, 2, 3, 4, 5];
/// Likelihood weights for ratings 1..=5, skewed to mid-range.
pub const LIKELIHOOD_WEIGHTS: [f64; 5] = [0.10, 0.20, 0.30, 0.25, 0.15];
/// Impact weights for ratings 1..=5.
pub const IMPACT_WEIGHTS: [f64; 5] = [0.05, 0.20, 0.30, 0.30, 0.15];
/// Probability that a weighted-variant risk has a control.
pub const CONTROL_EXISTS_PROBABILITY: f64 = 0.7;
/// Weighted choice used by the scenario-pool variant (2-of-3 "Yes").
pub const POOL_CONTROL_CHOICES: [bool; 3] = [true, true, false];
/// Inclusive rating range used by the scenario-pool variant.
pub const POOL_RATING_RANGE: std::ops::RangeInclusive<u8> = 2..=5;
