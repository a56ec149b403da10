//! Register use-case service.
//!
//! # Responsibility
//! - Run the generate -> score -> report pipeline for one configuration.
//! - Keep chart and workbook backends injectable.
//!
//! # Invariants
//! - Configuration is validated before any file is touched.
//! - A failure in any stage aborts the run and is returned unchanged.

use crate::config::{ConfigError, RegisterConfig};
use crate::generator::{generate_risks, GeneratorError};
use crate::report::chart::{ChartRenderer, PngChartRenderer};
use crate::report::summary::{ExecutiveSummary, RiskSummary};
use crate::report::workbook::{WorkbookWriter, XlsxWorkbookWriter};
use crate::report::{write_report, ReportError, ReportPaths};
use crate::scoring::score_all;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegisterResult<T> = Result<T, RegisterError>;

/// Service error for one pipeline run.
#[derive(Debug)]
pub enum RegisterError {
    Config(ConfigError),
    Generator(GeneratorError),
    Report(ReportError),
}

impl Display for RegisterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Generator(err) => write!(f, "{err}"),
            Self::Report(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegisterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Generator(err) => Some(err),
            Self::Report(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RegisterError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<GeneratorError> for RegisterError {
    fn from(value: GeneratorError) -> Self {
        Self::Generator(value)
    }
}

impl From<ReportError> for RegisterError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub paths: ReportPaths,
    pub executive: ExecutiveSummary,
}

impl RunOutcome {
    pub fn summary(&self) -> &RiskSummary {
        &self.executive.summary
    }
}

/// Pipeline service over chart and workbook backends.
pub struct RegisterService<C: ChartRenderer, W: WorkbookWriter> {
    chart: C,
    writer: W,
}

impl RegisterService<PngChartRenderer, XlsxWorkbookWriter> {
    /// PNG chart + xlsx workbook, the stock backends.
    pub fn with_default_backends() -> Self {
        Self::new(PngChartRenderer::default(), XlsxWorkbookWriter)
    }
}

impl<C: ChartRenderer, W: WorkbookWriter> RegisterService<C, W> {
    pub fn new(chart: C, writer: W) -> Self {
        Self { chart, writer }
    }

    /// Generates, scores and reports according to `config`.
    pub fn run(&self, config: &RegisterConfig) -> RegisterResult<RunOutcome> {
        config.validate()?;

        let records = generate_risks(config.variant, config.effective_count(), config.seed)?;
        let scored = score_all(&records);
        let paths = config.report_paths();
        let executive = write_report(&scored, &paths, &self.chart, &self.writer)?;

        log::info!(
            "event=register_run module=service status=ok variant={} records={} workbook={} chart={}",
            config.variant.as_str(),
            scored.len(),
            paths.workbook.display(),
            paths.chart.display()
        );
        Ok(RunOutcome { paths, executive })
    }
}
