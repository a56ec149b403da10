//! Core domain logic for the insurance risk register generator.
//! This crate is the single source of truth for scoring rules and report layout.

pub mod catalog;
pub mod config;
pub mod generator;
pub mod logging;
pub mod model;
pub mod report;
pub mod scoring;
pub mod service;

pub use config::{ConfigError, RegisterConfig};
pub use generator::{generate_risks, GeneratorError, GeneratorResult, GeneratorVariant};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::risk::{
    ControlEffectiveness, RiskCategory, RiskLevel, RiskRecord, RiskValidationError, ScoredRisk,
};
pub use report::chart::{ChartRenderer, PngChartRenderer};
pub use report::summary::{
    build_executive_summary, top_risks, ExecutiveSummary, LevelDistribution, RiskSummary,
};
pub use report::workbook::{Sheet, WorkbookWriter, XlsxWorkbookWriter};
pub use report::{write_report, ReportError, ReportPaths, ReportResult};
pub use scoring::{classify_level, score_all, score_risk};
pub use service::register_service::{RegisterError, RegisterResult, RegisterService, RunOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
