use risk_register_core::report::layout::{
    build_sheets, CALCULATED_SHEET, CHART_ANCHOR, RAW_COLUMNS, RAW_SHEET, SUMMARY_SHEET,
    TOP_RISKS_START_ROW, TOP_RISKS_TITLE, TOP_RISKS_TITLE_ROW,
};
use risk_register_core::report::workbook::CellValue;
use risk_register_core::{
    build_executive_summary, generate_risks, score_all, score_risk, top_risks,
    ControlEffectiveness, GeneratorVariant, RiskCategory, RiskRecord, RiskSummary, ScoredRisk,
};
use std::path::Path;

fn scored(id: usize, likelihood: u8, impact: u8) -> ScoredRisk {
    score_risk(&RiskRecord {
        id: RiskRecord::format_id(id),
        name: format!("Risk {id}"),
        category: RiskCategory::Cloud,
        asset: "Azure Key Vault".to_string(),
        threat: "token compromise".to_string(),
        vulnerability: "stale access keys".to_string(),
        likelihood,
        impact,
        control_exists: false,
        control_effectiveness: None,
    })
}

#[test]
fn level_counts_sum_to_total() {
    for seed in 0..10_u64 {
        let risks = score_all(&generate_risks(GeneratorVariant::Weighted, 50, seed).expect("generation should succeed"));
        let summary = RiskSummary::from_scored(&risks);
        assert_eq!(summary.total_risks, 50);
        assert_eq!(
            summary.high_risk_count + summary.medium_risk_count + summary.low_risk_count,
            summary.total_risks
        );
    }
}

#[test]
fn top_risks_are_sorted_and_bounded() {
    for count in [0_usize, 1, 3, 5, 6, 50] {
        let risks = score_all(&generate_risks(GeneratorVariant::Weighted, count, 42).expect("generation should succeed"));
        let top = top_risks(&risks, 5);
        assert_eq!(top.len(), count.min(5));
        assert!(top
            .windows(2)
            .all(|pair| pair[0].adjusted_score >= pair[1].adjusted_score));
        if let Some(first) = top.first() {
            let max = risks
                .iter()
                .map(|r| r.adjusted_score)
                .fold(f64::MIN, f64::max);
            assert_eq!(first.adjusted_score, max);
        }
    }
}

#[test]
fn top_risks_keep_insertion_order_on_ties() {
    let risks = vec![
        scored(1, 2, 2),
        scored(2, 5, 5),
        scored(3, 4, 1),
        scored(4, 5, 5),
        scored(5, 2, 2),
        scored(6, 1, 4),
        scored(7, 2, 2),
    ];
    let ids: Vec<_> = top_risks(&risks, 5)
        .into_iter()
        .map(|r| r.record.id)
        .collect();
    assert_eq!(
        ids,
        vec!["RISK-002", "RISK-004", "RISK-001", "RISK-003", "RISK-005"]
    );
}

#[test]
fn executive_summary_bundles_counts_and_top_five() {
    let risks = vec![scored(1, 5, 5), scored(2, 3, 3), scored(3, 1, 2)];
    let executive = build_executive_summary(&risks);
    assert_eq!(
        executive.summary,
        RiskSummary {
            total_risks: 3,
            high_risk_count: 1,
            medium_risk_count: 1,
            low_risk_count: 1,
        }
    );
    assert_eq!(executive.top_risks.len(), 3);
    assert_eq!(executive.top_risks[0].record.id, "RISK-001");
}

#[test]
fn sheets_follow_register_layout() {
    let mut risks = vec![scored(1, 5, 4), scored(2, 1, 1)];
    risks.push(score_risk(&RiskRecord {
        control_exists: true,
        control_effectiveness: Some(ControlEffectiveness::High),
        ..risks[0].record.clone()
    }));
    let executive = build_executive_summary(&risks);
    let sheets = build_sheets(&risks, &executive, Some(Path::new("chart.png")));

    let names: Vec<_> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec![RAW_SHEET, CALCULATED_SHEET, SUMMARY_SHEET]);

    let raw = &sheets[0].blocks[0];
    assert_eq!(raw.headers, RAW_COLUMNS);
    assert_eq!(raw.rows.len(), 3);
    assert!(raw.rows.iter().all(|row| row.len() == RAW_COLUMNS.len()));
    assert_eq!(raw.rows[1][8], CellValue::Text("No".to_string()));
    assert_eq!(raw.rows[1][9], CellValue::Text(String::new()));
    assert_eq!(raw.rows[2][9], CellValue::Text("High".to_string()));

    let calculated = &sheets[1].blocks[0];
    assert_eq!(calculated.headers.len(), 13);
    assert_eq!(
        calculated.headers[10..],
        ["Risk_Score", "Adjusted_Risk_Score", "Risk_Level"]
    );
    assert_eq!(calculated.rows[2][10], CellValue::Integer(20));
    assert_eq!(calculated.rows[2][11], CellValue::Number(10.0));
    assert_eq!(calculated.rows[2][12], CellValue::Text("Medium".to_string()));

    let summary = &sheets[2];
    assert_eq!(summary.blocks[0].start_row, 0);
    assert_eq!(summary.blocks[0].headers, ["Metric", "Value"]);
    assert_eq!(
        summary.blocks[0].rows[0],
        vec![CellValue::Text("Total Risks".to_string()), CellValue::Integer(3)]
    );
    assert_eq!(summary.blocks[1].start_row, TOP_RISKS_START_ROW);
    assert_eq!(
        summary.blocks[1].headers,
        ["Risk_ID", "Risk_Name", "Risk_Category", "Adjusted_Risk_Score", "Risk_Level"]
    );
    assert_eq!(summary.labels[0].row, TOP_RISKS_TITLE_ROW);
    assert_eq!(summary.labels[0].text, TOP_RISKS_TITLE);

    let image = summary.image.as_ref().expect("chart should be anchored");
    assert_eq!((image.row, image.col), CHART_ANCHOR);
    assert_eq!(image.path, Path::new("chart.png"));
}
