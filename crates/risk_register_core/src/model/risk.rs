//! Risk record domain model.
//!
//! # Responsibility
//! - Define the raw risk row produced by generators.
//! - Define the scored projection consumed by the reporter.
//!
//! # Invariants
//! - `likelihood` and `impact` stay within `1..=5`.
//! - `control_effectiveness` is `Some` iff `control_exists`.
//! - `ScoredRisk::adjusted_score` never exceeds `ScoredRisk::base_score`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted likelihood/impact rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted likelihood/impact rating.
pub const MAX_RATING: u8 = 5;

/// Business area a risk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Infrastructure,
    #[serde(rename = "IAM")]
    Iam,
    Network,
    Cloud,
    #[serde(rename = "Third Party")]
    ThirdParty,
    Privacy,
}

impl RiskCategory {
    /// All categories in catalog order.
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::Infrastructure,
        RiskCategory::Iam,
        RiskCategory::Network,
        RiskCategory::Cloud,
        RiskCategory::ThirdParty,
        RiskCategory::Privacy,
    ];

    /// Display label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Iam => "IAM",
            Self::Network => "Network",
            Self::Cloud => "Cloud",
            Self::ThirdParty => "Third Party",
            Self::Privacy => "Privacy",
        }
    }
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative rating of an existing mitigating control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlEffectiveness {
    Low,
    Medium,
    High,
}

impl ControlEffectiveness {
    pub const ALL: [ControlEffectiveness; 3] = [
        ControlEffectiveness::Low,
        ControlEffectiveness::Medium,
        ControlEffectiveness::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for ControlEffectiveness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity band derived from the adjusted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Levels in report order (most severe first).
    pub const REPORT_ORDER: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for risk-row invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskValidationError {
    EmptyId,
    LikelihoodOutOfRange(u8),
    ImpactOutOfRange(u8),
    EffectivenessWithoutControl { id: String },
    MissingEffectiveness { id: String },
}

impl Display for RiskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "risk id must not be empty"),
            Self::LikelihoodOutOfRange(value) => write!(
                f,
                "likelihood ({value}) must be within {MIN_RATING}..={MAX_RATING}"
            ),
            Self::ImpactOutOfRange(value) => write!(
                f,
                "impact ({value}) must be within {MIN_RATING}..={MAX_RATING}"
            ),
            Self::EffectivenessWithoutControl { id } => write!(
                f,
                "risk {id} has a control effectiveness but no control"
            ),
            Self::MissingEffectiveness { id } => {
                write!(f, "risk {id} has a control without an effectiveness rating")
            }
        }
    }
}

impl Error for RiskValidationError {}

/// One raw row of the risk register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Sequence-ordered token, e.g. `RISK-007`.
    pub id: String,
    pub name: String,
    pub category: RiskCategory,
    pub asset: String,
    pub threat: String,
    pub vulnerability: String,
    pub likelihood: u8,
    pub impact: u8,
    pub control_exists: bool,
    /// Meaningful only when `control_exists` is true.
    pub control_effectiveness: Option<ControlEffectiveness>,
}

impl RiskRecord {
    /// Formats the sequence token for a 1-based row index.
    pub fn format_id(index: usize) -> String {
        format!("RISK-{index:03}")
    }

    /// Validates field ranges and control consistency.
    pub fn validate(&self) -> Result<(), RiskValidationError> {
        if self.id.trim().is_empty() {
            return Err(RiskValidationError::EmptyId);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.likelihood) {
            return Err(RiskValidationError::LikelihoodOutOfRange(self.likelihood));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.impact) {
            return Err(RiskValidationError::ImpactOutOfRange(self.impact));
        }
        match (self.control_exists, self.control_effectiveness) {
            (true, None) => Err(RiskValidationError::MissingEffectiveness {
                id: self.id.clone(),
            }),
            (false, Some(_)) => Err(RiskValidationError::EffectivenessWithoutControl {
                id: self.id.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// "Yes"/"No" label for the control flag.
    pub fn control_exists_label(&self) -> &'static str {
        if self.control_exists {
            "Yes"
        } else {
            "No"
        }
    }

    /// Effectiveness label, empty when no control exists.
    pub fn control_effectiveness_label(&self) -> &'static str {
        self.control_effectiveness
            .map(ControlEffectiveness::as_str)
            .unwrap_or("")
    }
}

/// A risk row enriched with derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRisk {
    #[serde(flatten)]
    pub record: RiskRecord,
    /// `likelihood * impact`, within `1..=25`.
    pub base_score: u8,
    /// Base score after control discount, rounded to two decimals.
    pub adjusted_score: f64,
    pub risk_level: RiskLevel,
}
