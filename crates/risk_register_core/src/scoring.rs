//! Risk scoring and severity classification.
//!
//! # Responsibility
//! - Derive base and control-adjusted scores for raw records.
//! - Map adjusted scores to severity bands.
//!
//! # Invariants
//! - Scoring is a pure function of the input record.
//! - `adjusted_score <= base_score` for every record.
//! - Band boundaries (5.0, 12.0) belong to the lower band.

use crate::model::risk::{ControlEffectiveness, RiskLevel, RiskRecord, ScoredRisk};

/// Upper bound (inclusive) of the `Low` band.
pub const LOW_BAND_MAX: f64 = 5.0;
/// Upper bound (inclusive) of the `Medium` band.
pub const MEDIUM_BAND_MAX: f64 = 12.0;

/// Fraction of the base score retained for a given control rating.
pub fn retained_fraction(effectiveness: ControlEffectiveness) -> f64 {
    match effectiveness {
        ControlEffectiveness::High => 0.5,
        ControlEffectiveness::Medium => 0.7,
        ControlEffectiveness::Low => 0.9,
    }
}

/// `likelihood * impact`.
pub fn base_score(record: &RiskRecord) -> u8 {
    record.likelihood.saturating_mul(record.impact)
}

/// Applies the control discount and rounds to two decimals.
///
/// A control flagged as existing but without a rating is left undiscounted;
/// validated records never hit that case.
pub fn adjusted_score(record: &RiskRecord) -> f64 {
    let base = f64::from(base_score(record));
    let factor = match (record.control_exists, record.control_effectiveness) {
        (true, Some(effectiveness)) => retained_fraction(effectiveness),
        _ => 1.0,
    };
    round_to_cents(base * factor)
}

/// Classifies an adjusted score into a severity band.
pub fn classify_level(score: f64) -> RiskLevel {
    if score <= LOW_BAND_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_BAND_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Enriches one record with its derived scores.
pub fn score_risk(record: &RiskRecord) -> ScoredRisk {
    let adjusted = adjusted_score(record);
    ScoredRisk {
        record: record.clone(),
        base_score: base_score(record),
        adjusted_score: adjusted,
        risk_level: classify_level(adjusted),
    }
}

/// Scores a collection, preserving input order.
pub fn score_all(records: &[RiskRecord]) -> Vec<ScoredRisk> {
    records.iter().map(score_risk).collect()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
