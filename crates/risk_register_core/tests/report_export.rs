use calamine::{open_workbook, Data, Reader, Xlsx};
use risk_register_core::report::layout::{
    CALCULATED_SHEET, RAW_SHEET, SUMMARY_SHEET, TOP_RISKS_START_ROW, TOP_RISKS_TITLE,
    TOP_RISKS_TITLE_ROW,
};
use risk_register_core::{
    write_report, GeneratorVariant, PngChartRenderer, RegisterConfig, RegisterError,
    RegisterService, ReportError, ReportPaths, XlsxWorkbookWriter,
};
use std::fs;

fn config_in(dir: &std::path::Path) -> RegisterConfig {
    RegisterConfig {
        output_dir: dir.to_path_buf(),
        ..RegisterConfig::default()
    }
}

#[test]
fn default_run_writes_chart_and_workbook() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let config = config_in(dir.path());

    let outcome = RegisterService::with_default_backends()
        .run(&config)
        .expect("register run should succeed");

    assert_eq!(
        outcome.paths.workbook,
        dir.path().join("Insurance_Risk_Register.xlsx")
    );
    assert_eq!(outcome.paths.chart, dir.path().join("risk_distribution.png"));
    assert_eq!(outcome.summary().total_risks, 50);

    let chart = image::open(&outcome.paths.chart).expect("chart should decode as png");
    assert_eq!((chart.width(), chart.height()), (900, 600));

    let workbook = fs::read(&outcome.paths.workbook).expect("workbook should be readable");
    assert!(workbook.starts_with(b"PK"), "xlsx should be a zip container");
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let config = config_in(dir.path());
    let paths = config.report_paths();
    fs::write(&paths.workbook, b"stale workbook").expect("stale workbook should be written");
    fs::write(&paths.chart, b"stale chart").expect("stale chart should be written");

    RegisterService::with_default_backends()
        .run(&config)
        .expect("register run should succeed");

    assert!(fs::read(&paths.workbook)
        .expect("workbook should be readable")
        .starts_with(b"PK"));
    assert!(image::open(&paths.chart).is_ok());
}

#[test]
fn pool_variant_run_reports_capped_total() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let config = RegisterConfig {
        variant: GeneratorVariant::ScenarioPool,
        count: Some(100),
        ..config_in(dir.path())
    };

    let outcome = RegisterService::with_default_backends()
        .run(&config)
        .expect("register run should succeed");
    assert_eq!(outcome.summary().total_risks, 49);
    assert_eq!(outcome.executive.top_risks.len(), 5);
}

#[test]
fn empty_register_still_produces_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let paths = ReportPaths {
        workbook: dir.path().join("empty.xlsx"),
        chart: dir.path().join("empty.png"),
    };

    let executive =
        write_report(&[], &paths, &PngChartRenderer::default(), &XlsxWorkbookWriter)
            .expect("empty report should be written");

    assert_eq!(executive.summary.total_risks, 0);
    assert!(executive.top_risks.is_empty());
    assert!(paths.chart.exists());
    assert!(paths.workbook.exists());
}

#[test]
fn missing_output_directory_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let config = config_in(&dir.path().join("does-not-exist"));

    let err = RegisterService::with_default_backends()
        .run(&config)
        .expect_err("missing output directory should fail");

    assert!(matches!(err, RegisterError::Report(ReportError::Image(_))));
    assert!(!config.report_paths().workbook.exists());
}

fn text_at(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(text)) => Some(text.clone()),
        _ => None,
    }
}

#[test]
fn written_workbook_reads_back_with_expected_layout() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let outcome = RegisterService::with_default_backends()
        .run(&config_in(dir.path()))
        .expect("register run should succeed");

    let mut workbook: Xlsx<_> =
        open_workbook(&outcome.paths.workbook).expect("workbook should open as xlsx");
    assert_eq!(
        workbook.sheet_names(),
        vec![
            RAW_SHEET.to_string(),
            CALCULATED_SHEET.to_string(),
            SUMMARY_SHEET.to_string()
        ]
    );

    let raw = workbook
        .worksheet_range(RAW_SHEET)
        .expect("raw sheet should be readable");
    assert_eq!(text_at(&raw, 0, 0).as_deref(), Some("Risk_ID"));
    assert_eq!(text_at(&raw, 1, 0).as_deref(), Some("RISK-001"));
    assert_eq!(raw.height(), 51);

    let calculated = workbook
        .worksheet_range(CALCULATED_SHEET)
        .expect("calculated sheet should be readable");
    assert_eq!(text_at(&calculated, 0, 12).as_deref(), Some("Risk_Level"));
    assert!(matches!(calculated.get_value((1, 10)), Some(Data::Float(_))));

    let summary = workbook
        .worksheet_range(SUMMARY_SHEET)
        .expect("summary sheet should be readable");
    assert_eq!(text_at(&summary, 0, 0).as_deref(), Some("Metric"));
    assert_eq!(text_at(&summary, 1, 0).as_deref(), Some("Total Risks"));
    assert_eq!(summary.get_value((1, 1)), Some(&Data::Float(50.0)));
    assert_eq!(
        text_at(&summary, TOP_RISKS_TITLE_ROW, 0).as_deref(),
        Some(TOP_RISKS_TITLE)
    );
    assert_eq!(
        text_at(&summary, TOP_RISKS_START_ROW, 0).as_deref(),
        Some("Risk_ID")
    );
    assert_eq!(
        text_at(&summary, TOP_RISKS_START_ROW, 4).as_deref(),
        Some("Risk_Level")
    );
    let top_id = text_at(&summary, TOP_RISKS_START_ROW + 1, 0)
        .expect("first top risk row should carry an id");
    assert_eq!(top_id, outcome.executive.top_risks[0].record.id);

    let pictures = workbook
        .pictures()
        .expect("summary sheet should embed the chart");
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].0, "png");
}
