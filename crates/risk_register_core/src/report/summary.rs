//! Executive summary aggregation.
//!
//! # Invariants
//! - Every level count is present (zero when no record has that level).
//! - `high + medium + low == total`.
//! - Top risks are ordered by adjusted score descending, ties keep input order.

use crate::model::risk::{RiskLevel, ScoredRisk};
use serde::Serialize;

/// Number of rows in the executive top-risk table.
pub const TOP_RISK_LIMIT: usize = 5;

/// Aggregate counters over a scored collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub total_risks: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
}

impl RiskSummary {
    pub fn from_scored(risks: &[ScoredRisk]) -> Self {
        let mut summary = Self {
            total_risks: risks.len(),
            ..Self::default()
        };
        for risk in risks {
            match risk.risk_level {
                RiskLevel::High => summary.high_risk_count += 1,
                RiskLevel::Medium => summary.medium_risk_count += 1,
                RiskLevel::Low => summary.low_risk_count += 1,
            }
        }
        summary
    }

    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high_risk_count,
            RiskLevel::Medium => self.medium_risk_count,
            RiskLevel::Low => self.low_risk_count,
        }
    }

    /// Metric label/value pairs in executive-sheet order.
    pub fn metrics(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Risks", self.total_risks),
            ("High Risk Count", self.high_risk_count),
            ("Medium Risk Count", self.medium_risk_count),
            ("Low Risk Count", self.low_risk_count),
        ]
    }
}

/// Bar values for the distribution chart, always High, Medium, Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDistribution {
    pub bars: [(RiskLevel, usize); 3],
}

impl LevelDistribution {
    pub fn from_summary(summary: &RiskSummary) -> Self {
        Self {
            bars: RiskLevel::REPORT_ORDER.map(|level| (level, summary.count_for(level))),
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

/// Summary counters plus the highest-scored risks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSummary {
    pub summary: RiskSummary,
    pub top_risks: Vec<ScoredRisk>,
}

/// Returns up to `limit` risks by adjusted score, highest first.
///
/// Uses a stable sort, so equal scores keep their insertion order.
pub fn top_risks(risks: &[ScoredRisk], limit: usize) -> Vec<ScoredRisk> {
    let mut ranked: Vec<&ScoredRisk> = risks.iter().collect();
    ranked.sort_by(|left, right| right.adjusted_score.total_cmp(&left.adjusted_score));
    ranked.into_iter().take(limit).cloned().collect()
}

pub fn build_executive_summary(risks: &[ScoredRisk]) -> ExecutiveSummary {
    ExecutiveSummary {
        summary: RiskSummary::from_scored(risks),
        top_risks: top_risks(risks, TOP_RISK_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::{LevelDistribution, RiskSummary};
    use crate::model::risk::RiskLevel;

    #[test]
    fn distribution_keeps_zero_levels_in_fixed_order() {
        let summary = RiskSummary {
            total_risks: 2,
            high_risk_count: 0,
            medium_risk_count: 0,
            low_risk_count: 2,
        };
        let distribution = LevelDistribution::from_summary(&summary);
        assert_eq!(
            distribution.bars,
            [
                (RiskLevel::High, 0),
                (RiskLevel::Medium, 0),
                (RiskLevel::Low, 2)
            ]
        );
        assert_eq!(distribution.max_count(), 2);
    }

    #[test]
    fn empty_summary_reports_all_zero_metrics() {
        let summary = RiskSummary::from_scored(&[]);
        assert!(summary.metrics().iter().all(|(_, value)| *value == 0));
    }
}
