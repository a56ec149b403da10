//! Run configuration for the register pipeline.
//!
//! # Invariants
//! - Output file names are bare names (no directories) with the expected extension.
//! - Defaults reproduce the stock report: 50 weighted risks, seed 42.
//! - An unset `count` resolves to the selected variant's default.

use crate::generator::{GeneratorVariant, DEFAULT_SEED};
use crate::logging::{default_log_level, normalize_level};
use crate::report::ReportPaths;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_WORKBOOK_FILE: &str = "Insurance_Risk_Register.xlsx";
pub const DEFAULT_CHART_FILE: &str = "risk_distribution.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyFileName(&'static str),
    FileNameHasPath { field: &'static str, value: String },
    WrongExtension {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
    EmptyOutputDir,
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFileName(field) => write!(f, "{field} must not be empty"),
            Self::FileNameHasPath { field, value } => {
                write!(f, "{field} must be a bare file name, got `{value}`")
            }
            Self::WrongExtension {
                field,
                expected,
                value,
            } => write!(f, "{field} must end with `.{expected}`, got `{value}`"),
            Self::EmptyOutputDir => write!(f, "output_dir must not be empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Pipeline settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    pub variant: GeneratorVariant,
    /// Records to generate; `None` uses the variant's default count.
    pub count: Option<usize>,
    pub seed: u64,
    pub output_dir: PathBuf,
    pub workbook_file: String,
    pub chart_file: String,
    pub log_level: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            variant: GeneratorVariant::Weighted,
            count: None,
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("."),
            workbook_file: DEFAULT_WORKBOOK_FILE.to_string(),
            chart_file: DEFAULT_CHART_FILE.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl RegisterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        validate_file_name("workbook_file", &self.workbook_file, "xlsx")?;
        validate_file_name("chart_file", &self.chart_file, "png")?;
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    /// Explicit `count`, or the variant default when unset.
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or_else(|| self.variant.default_count())
    }

    /// Workbook and chart paths under `output_dir`.
    pub fn report_paths(&self) -> ReportPaths {
        ReportPaths {
            workbook: self.output_dir.join(&self.workbook_file),
            chart: self.output_dir.join(&self.chart_file),
        }
    }
}

fn validate_file_name(
    field: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyFileName(field));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(ConfigError::FileNameHasPath {
            field,
            value: value.to_string(),
        });
    }
    let has_extension = trimmed
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(expected));
    if !has_extension {
        return Err(ConfigError::WrongExtension {
            field,
            expected,
            value: value.to_string(),
        });
    }
    Ok(())
}
