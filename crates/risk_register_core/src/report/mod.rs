//! Report generation: summary metrics, distribution chart and workbook.
//!
//! # Responsibility
//! - Aggregate scored risks into executive metrics.
//! - Drive the chart and workbook collaborators behind narrow traits.
//!
//! # Invariants
//! - The chart is written before the workbook that embeds it.
//! - Existing output files are overwritten.
//! - Any collaborator failure aborts the report; nothing is rolled back.

pub mod chart;
mod glyphs;
pub mod layout;
pub mod summary;
pub mod workbook;

use crate::model::risk::ScoredRisk;
use chart::ChartRenderer;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use summary::{build_executive_summary, ExecutiveSummary, LevelDistribution};
use workbook::WorkbookWriter;

pub type ReportResult<T> = Result<T, ReportError>;

/// Failure while rendering or writing report artifacts.
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Image(image::ImageError),
    Workbook(rust_xlsxwriter::XlsxError),
    Layout(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "report i/o failed: {err}"),
            Self::Image(err) => write!(f, "chart rendering failed: {err}"),
            Self::Workbook(err) => write!(f, "workbook export failed: {err}"),
            Self::Layout(message) => write!(f, "invalid sheet layout: {message}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Workbook(err) => Some(err),
            Self::Layout(_) => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<image::ImageError> for ReportError {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(value)
    }
}

/// Output locations for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub workbook: PathBuf,
    pub chart: PathBuf,
}

impl ReportPaths {
    /// Workbook path as shown to users; a leading `./` is dropped.
    pub fn workbook_display(&self) -> &Path {
        strip_current_dir(&self.workbook)
    }

    /// Chart path as shown to users; a leading `./` is dropped.
    pub fn chart_display(&self) -> &Path {
        strip_current_dir(&self.chart)
    }
}

fn strip_current_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

/// Renders the chart, then writes the three-sheet workbook embedding it.
pub fn write_report<C, W>(
    risks: &[ScoredRisk],
    paths: &ReportPaths,
    chart: &C,
    writer: &W,
) -> ReportResult<ExecutiveSummary>
where
    C: ChartRenderer + ?Sized,
    W: WorkbookWriter + ?Sized,
{
    let executive = build_executive_summary(risks);
    let distribution = LevelDistribution::from_summary(&executive.summary);

    chart.render_distribution(&distribution, &paths.chart)?;

    let sheets = layout::build_sheets(risks, &executive, Some(paths.chart.as_path()));
    writer.write_workbook(&sheets, &paths.workbook)?;

    log::info!(
        "event=report_written module=report status=ok total={} high={} medium={} low={}",
        executive.summary.total_risks,
        executive.summary.high_risk_count,
        executive.summary.medium_risk_count,
        executive.summary.low_risk_count
    );
    Ok(executive)
}

#[cfg(test)]
mod tests {
    use super::ReportPaths;
    use std::path::{Path, PathBuf};

    #[test]
    fn display_paths_drop_current_dir_prefix() {
        let paths = ReportPaths {
            workbook: Path::new(".").join("Insurance_Risk_Register.xlsx"),
            chart: Path::new(".").join("risk_distribution.png"),
        };
        assert_eq!(
            paths.workbook_display(),
            Path::new("Insurance_Risk_Register.xlsx")
        );
        assert_eq!(paths.chart_display(), Path::new("risk_distribution.png"));
    }

    #[test]
    fn display_paths_keep_other_directories() {
        let paths = ReportPaths {
            workbook: PathBuf::from("out/register.xlsx"),
            chart: PathBuf::from("/tmp/chart.png"),
        };
        assert_eq!(paths.workbook_display(), Path::new("out/register.xlsx"));
        assert_eq!(paths.chart_display(), Path::new("/tmp/chart.png"));
    }
}
