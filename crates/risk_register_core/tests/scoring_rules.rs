use risk_register_core::{
    classify_level, generate_risks, score_all, score_risk, ControlEffectiveness,
    GeneratorVariant, RiskCategory, RiskLevel, RiskRecord,
};

fn record(likelihood: u8, impact: u8, control: Option<ControlEffectiveness>) -> RiskRecord {
    RiskRecord {
        id: "RISK-001".to_string(),
        name: "Hardware failure impacting VMware Cluster".to_string(),
        category: RiskCategory::Infrastructure,
        asset: "VMware Cluster".to_string(),
        threat: "hardware failure".to_string(),
        vulnerability: "single points of failure".to_string(),
        likelihood,
        impact,
        control_exists: control.is_some(),
        control_effectiveness: control,
    }
}

#[test]
fn high_control_halves_score() {
    let scored = score_risk(&record(4, 5, Some(ControlEffectiveness::High)));
    assert_eq!(scored.base_score, 20);
    assert_eq!(scored.adjusted_score, 10.0);
    assert_eq!(scored.risk_level, RiskLevel::Medium);
}

#[test]
fn missing_control_keeps_base_score() {
    let scored = score_risk(&record(1, 1, None));
    assert_eq!(scored.base_score, 1);
    assert_eq!(scored.adjusted_score, 1.0);
    assert_eq!(scored.risk_level, RiskLevel::Low);
}

#[test]
fn medium_and_low_controls_retain_seventy_and_ninety_percent() {
    let medium = score_risk(&record(5, 5, Some(ControlEffectiveness::Medium)));
    assert_eq!(medium.adjusted_score, 17.5);
    assert_eq!(medium.risk_level, RiskLevel::High);

    let low = score_risk(&record(3, 3, Some(ControlEffectiveness::Low)));
    assert_eq!(low.adjusted_score, 8.1);
    assert_eq!(low.risk_level, RiskLevel::Medium);
}

#[test]
fn band_boundaries_are_inclusive_of_lower_band() {
    let five = score_risk(&record(1, 5, None));
    assert_eq!(five.adjusted_score, 5.0);
    assert_eq!(five.risk_level, RiskLevel::Low);

    let twelve = score_risk(&record(3, 4, None));
    assert_eq!(twelve.adjusted_score, 12.0);
    assert_eq!(twelve.risk_level, RiskLevel::Medium);

    let thirteen_and_half = score_risk(&record(3, 5, Some(ControlEffectiveness::Low)));
    assert_eq!(thirteen_and_half.adjusted_score, 13.5);
    assert_eq!(thirteen_and_half.risk_level, RiskLevel::High);
}

#[test]
fn scored_collections_honor_score_invariants() {
    for variant in [GeneratorVariant::Weighted, GeneratorVariant::ScenarioPool] {
        for seed in 0..20_u64 {
            let records = generate_risks(variant, 50, seed).expect("generation should succeed");
            let scored = score_all(&records);
            assert_eq!(scored.len(), records.len());

            for (risk, raw) in scored.iter().zip(&records) {
                assert_eq!(&risk.record, raw);
                let base = f64::from(risk.base_score);
                assert_eq!(risk.base_score, raw.likelihood * raw.impact);
                assert!(risk.adjusted_score <= base);
                assert!(risk.adjusted_score > 0.0);
                assert_eq!(risk.risk_level, classify_level(risk.adjusted_score));

                let expected = if risk.adjusted_score <= 5.0 {
                    RiskLevel::Low
                } else if risk.adjusted_score <= 12.0 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::High
                };
                assert_eq!(risk.risk_level, expected);
            }
        }
    }
}

#[test]
fn adjusted_scores_have_at_most_two_decimals() {
    let records = generate_risks(GeneratorVariant::Weighted, 200, 3).expect("generation should succeed");
    for risk in score_all(&records) {
        let cents = risk.adjusted_score * 100.0;
        assert!((cents - cents.round()).abs() < 1e-9, "{}", risk.adjusted_score);
    }
}
