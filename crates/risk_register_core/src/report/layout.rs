//! Sheet layouts for the risk register workbook.

use super::summary::ExecutiveSummary;
use super::workbook::{CellLabel, CellValue, ImageAnchor, Sheet, TableBlock};
use crate::model::risk::{RiskRecord, ScoredRisk};
use std::path::Path;

pub const RAW_SHEET: &str = "Raw_Risks";
pub const CALCULATED_SHEET: &str = "Calculated_Risks";
pub const SUMMARY_SHEET: &str = "Executive_Summary";

pub const RAW_COLUMNS: [&str; 10] = [
    "Risk_ID",
    "Risk_Name",
    "Risk_Category",
    "Asset_Name",
    "Threat_Description",
    "Vulnerability_Description",
    "Likelihood",
    "Impact",
    "Control_Exists",
    "Control_Effectiveness",
];
pub const SCORE_COLUMNS: [&str; 3] = ["Risk_Score", "Adjusted_Risk_Score", "Risk_Level"];
pub const METRIC_COLUMNS: [&str; 2] = ["Metric", "Value"];
pub const TOP_RISK_COLUMNS: [&str; 5] = [
    "Risk_ID",
    "Risk_Name",
    "Risk_Category",
    "Adjusted_Risk_Score",
    "Risk_Level",
];

pub const METRICS_START_ROW: u32 = 0;
/// Cell A7.
pub const TOP_RISKS_TITLE_ROW: u32 = 6;
pub const TOP_RISKS_TITLE: &str = "Top 5 Risks by Adjusted Score";
pub const TOP_RISKS_START_ROW: u32 = 7;
/// Cell E2.
pub const CHART_ANCHOR: (u32, u16) = (1, 4);

fn headers(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| column.to_string()).collect()
}

fn raw_cells(record: &RiskRecord) -> Vec<CellValue> {
    vec![
        CellValue::from(record.id.as_str()),
        CellValue::from(record.name.as_str()),
        CellValue::from(record.category.as_str()),
        CellValue::from(record.asset.as_str()),
        CellValue::from(record.threat.as_str()),
        CellValue::from(record.vulnerability.as_str()),
        CellValue::Integer(i64::from(record.likelihood)),
        CellValue::Integer(i64::from(record.impact)),
        CellValue::from(record.control_exists_label()),
        CellValue::from(record.control_effectiveness_label()),
    ]
}

/// Unenriched columns only.
pub fn raw_risks_sheet(risks: &[ScoredRisk]) -> Sheet {
    let mut sheet = Sheet::new(RAW_SHEET);
    sheet.blocks.push(TableBlock {
        start_row: 0,
        headers: headers(&RAW_COLUMNS),
        rows: risks.iter().map(|risk| raw_cells(&risk.record)).collect(),
    });
    sheet
}

/// Raw columns followed by derived scores.
pub fn calculated_risks_sheet(risks: &[ScoredRisk]) -> Sheet {
    let mut columns = headers(&RAW_COLUMNS);
    columns.extend(headers(&SCORE_COLUMNS));

    let rows = risks
        .iter()
        .map(|risk| {
            let mut cells = raw_cells(&risk.record);
            cells.push(CellValue::Integer(i64::from(risk.base_score)));
            cells.push(CellValue::Number(risk.adjusted_score));
            cells.push(CellValue::from(risk.risk_level.as_str()));
            cells
        })
        .collect();

    let mut sheet = Sheet::new(CALCULATED_SHEET);
    sheet.blocks.push(TableBlock {
        start_row: 0,
        headers: columns,
        rows,
    });
    sheet
}

/// Metrics at the top, titled top-5 table below, chart at E2.
pub fn executive_summary_sheet(summary: &ExecutiveSummary, chart: Option<&Path>) -> Sheet {
    let metrics = summary
        .summary
        .metrics()
        .iter()
        .map(|(label, value)| {
            vec![
                CellValue::from(*label),
                CellValue::Integer(i64::try_from(*value).unwrap_or(i64::MAX)),
            ]
        })
        .collect();

    let top_rows = summary
        .top_risks
        .iter()
        .map(|risk| {
            vec![
                CellValue::from(risk.record.id.as_str()),
                CellValue::from(risk.record.name.as_str()),
                CellValue::from(risk.record.category.as_str()),
                CellValue::Number(risk.adjusted_score),
                CellValue::from(risk.risk_level.as_str()),
            ]
        })
        .collect();

    let mut sheet = Sheet::new(SUMMARY_SHEET);
    sheet.blocks.push(TableBlock {
        start_row: METRICS_START_ROW,
        headers: headers(&METRIC_COLUMNS),
        rows: metrics,
    });
    sheet.blocks.push(TableBlock {
        start_row: TOP_RISKS_START_ROW,
        headers: headers(&TOP_RISK_COLUMNS),
        rows: top_rows,
    });
    sheet.labels.push(CellLabel {
        row: TOP_RISKS_TITLE_ROW,
        col: 0,
        text: TOP_RISKS_TITLE.to_string(),
    });
    sheet.image = chart.map(|path| ImageAnchor {
        row: CHART_ANCHOR.0,
        col: CHART_ANCHOR.1,
        path: path.to_path_buf(),
    });
    sheet
}

/// All three sheets in workbook order.
pub fn build_sheets(
    risks: &[ScoredRisk],
    summary: &ExecutiveSummary,
    chart: Option<&Path>,
) -> Vec<Sheet> {
    vec![
        raw_risks_sheet(risks),
        calculated_risks_sheet(risks),
        executive_summary_sheet(summary, chart),
    ]
}
