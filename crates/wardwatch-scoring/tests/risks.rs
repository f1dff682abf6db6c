use serde_json::json;
use wardwatch_core::{Condition, Mode, Patient, RiskLevel, RiskResult};
use wardwatch_scoring::{assess_condition, compute_risks, risk_assessors};

fn patient(value: serde_json::Value) -> Patient {
    serde_json::from_value(value).unwrap()
}

fn assess(value: serde_json::Value, condition: Condition) -> RiskResult {
    assess_condition(&patient(value), condition, Mode::Guideline)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn codes(result: &RiskResult) -> Vec<&str> {
    result.triggers.iter().map(|t| t.code.as_str()).collect()
}

fn kitchen_sink() -> Patient {
    patient(json!({
        "id": "sink",
        "age": 88,
        "presentingComplaint": "Fever, cough and confusion",
        "vitals": {
            "rr": 32, "spo2": 86, "temp": 39.4, "systolicBp": 82, "diastolicBp": 50,
            "hr": 140, "avpu": "C", "supplementalO2": true
        },
        "labs": {
            "currentCreatinine": 420, "baselineCreatinine": 90,
            "currentEgfr": 18, "baselineEgfr": 70,
            "wbc": 22, "crp": 310, "potassium": 6.8, "sodium": 121,
            "ph": 7.1, "inr": 4.2
        },
        "pmh": ["cancer", "previous DVT", "dementia", "COPD", "stroke", "liver disease",
                "previous fall", "previous delirium", "alcohol excess"],
        "medications": ["warfarin", "insulin", "opioid", "diuretic", "ramipril", "nsaid",
                        "benzodiazepine", "amlodipine", "metformin", "omeprazole"],
        "allergies": ["penicillin"],
        "mobility": "bedbound",
        "cognitive": "impaired",
        "continence": "incontinent",
        "skinCondition": "broken",
        "nutrition": "poor",
        "bmi": 16.5,
        "weightLoss": ">10%",
        "acuteDisease": true
    }))
}

#[test]
fn empty_patient_scores_zero_for_every_condition_in_both_modes() {
    for mode in [Mode::Demo, Mode::Guideline] {
        let report = compute_risks(&Patient::default(), mode);
        assert_eq!(report.risks.len(), 12);
        for (condition, result) in &report.risks {
            assert_eq!(result.score, 0.0, "{condition}");
            assert_eq!(result.level, RiskLevel::Low, "{condition}");
            assert!(result.factors.is_empty(), "{condition}: {:?}", result.factors);
        }
        assert_eq!(report.overall.score, 0.0);
        assert_eq!(report.overall.level, RiskLevel::Low);
    }
}

#[test]
fn every_score_is_bounded_and_banded() {
    let sink = kitchen_sink();
    for mode in [Mode::Demo, Mode::Guideline] {
        for assessor in risk_assessors(mode) {
            let result = assessor.assess(&sink);
            assert!((0.0..=1.0).contains(&result.score), "{}", assessor.name());
            assert_eq!(result.level, RiskLevel::from_score(result.score));
            assert_eq!(result.factors.len(), result.triggers.len());
            assert_eq!(result.guideline, assessor.guideline());
        }
    }
}

#[test]
fn same_input_gives_identical_report() {
    let sink = kitchen_sink();
    assert_eq!(
        compute_risks(&sink, Mode::Guideline),
        compute_risks(&sink, Mode::Guideline)
    );
    assert_eq!(compute_risks(&sink, Mode::Demo), compute_risks(&sink, Mode::Demo));
}

#[test]
fn aki_stage_1_at_one_and_a_half_times_baseline() {
    let result = assess(
        json!({ "labs": { "baselineCreatinine": 80, "currentCreatinine": 120 } }),
        Condition::Aki,
    );
    assert_eq!(result.stage, Some(1));
    assert_close(result.score, 0.5);
    assert_eq!(result.level, RiskLevel::Moderate);
}

#[test]
fn aki_stage_2_at_two_and_a_quarter_times_baseline() {
    let result = assess(
        json!({ "labs": { "baselineCreatinine": 80, "currentCreatinine": 180 } }),
        Condition::Aki,
    );
    assert_eq!(result.stage, Some(2));
    assert_close(result.score, 0.75);
    assert_eq!(result.level, RiskLevel::High);
    assert!(codes(&result).contains(&"creatinine_2x_baseline"));
}

#[test]
fn aki_stage_3_above_three_times_baseline() {
    let result = assess(
        json!({ "labs": { "baselineCreatinine": 80, "currentCreatinine": 250 } }),
        Condition::Aki,
    );
    assert_eq!(result.stage, Some(3));
    assert_close(result.score, 0.95);
}

#[test]
fn aki_stage_3_on_absolute_creatinine() {
    let result = assess(
        json!({ "labs": { "baselineCreatinine": 150, "currentCreatinine": 360 } }),
        Condition::Aki,
    );
    assert_eq!(result.stage, Some(3));
    assert_eq!(result.triggers.last().unwrap().value, Some(360.0));
}

#[test]
fn aki_small_rise_is_stage_0() {
    let result = assess(
        json!({ "labs": { "baselineCreatinine": 100, "currentCreatinine": 110 } }),
        Condition::Aki,
    );
    assert_eq!(result.stage, Some(0));
    assert_eq!(result.score, 0.0);
    assert_eq!(codes(&result), vec!["creatinine_below_criteria"]);
}

#[test]
fn aki_without_both_creatinines_is_stage_0_with_no_factors() {
    let result = assess(json!({ "labs": { "currentCreatinine": 300 } }), Condition::Aki);
    assert_eq!(result.stage, Some(0));
    assert!(result.factors.is_empty());
}

#[test]
fn aki_demo_rules_sum_and_clamp() {
    let p = patient(json!({
        "age": 70,
        "labs": { "currentEgfr": 45, "baselineEgfr": 80 },
        "medications": ["Ramipril 10mg"]
    }));
    let result = assess_condition(&p, Condition::Aki, Mode::Demo);
    assert_eq!(result.mode, Mode::Demo);
    assert_eq!(result.guideline, "Demo heuristic (not guideline-based)");
    assert_close(result.score, 1.0);
    assert_eq!(
        codes(&result),
        vec!["egfr_below_60", "egfr_fall_from_baseline", "ace_inhibitor_or_diuretic", "age_65_plus"]
    );
    assert_eq!(result.stage, None);
}

#[test]
fn sepsis_guideline_high_band_with_supporting_labs() {
    let result = assess(
        json!({
            "presentingComplaint": "Fever and rigors",
            "vitals": { "news2": 7 },
            "labs": { "crp": 150, "wbc": 15 }
        }),
        Condition::Sepsis,
    );
    assert_close(result.score, 1.0);
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(
        codes(&result),
        vec!["infection_suspected", "news2_7_plus_with_infection", "crp_100_plus", "wbc_abnormal"]
    );
}

#[test]
fn sepsis_guideline_moderate_band() {
    let result = assess(
        json!({ "presentingComplaint": "UTI", "vitals": { "news2": 5 } }),
        Condition::Sepsis,
    );
    assert_close(result.score, 0.6);
    assert_eq!(result.level, RiskLevel::Moderate);
}

#[test]
fn sepsis_guideline_without_infection_is_low() {
    let result = assess(
        json!({ "presentingComplaint": "Fall", "vitals": { "news2": 8 } }),
        Condition::Sepsis,
    );
    assert_close(result.score, 0.1);
    assert!(codes(&result).contains(&"infection_not_suggested"));
}

#[test]
fn sepsis_uses_computed_news2_when_none_charted() {
    // RR 25 (3) + SpO2 91 (3) + HR 131 (3) = 9.
    let result = assess(
        json!({
            "presentingComplaint": "cellulitis",
            "vitals": { "rr": 25, "spo2": 91, "hr": 131 }
        }),
        Condition::Sepsis,
    );
    assert_close(result.score, 0.9);
}

#[test]
fn sepsis_demo_counts_each_abnormal_sign() {
    let p = patient(json!({
        "age": 70,
        "presentingComplaint": "fever",
        "vitals": { "temp": 38.5, "rr": 24, "ews": 4 },
        "labs": { "wbc": 2.5, "crp": 40 }
    }));
    let result = assess_condition(&p, Condition::Sepsis, Mode::Demo);
    // WBC 0.2 + NEWS2 0.2 + temp 0.1 + RR 0.1 + complaint 0.1 + age 0.1
    assert_close(result.score, 0.8);
    assert_eq!(result.mode, Mode::Demo);
}

#[test]
fn padua_cancer_prior_dvt_and_reduced_mobility_is_nine() {
    let result = assess(
        json!({ "pmh": ["cancer", "previous DVT"], "mobility": "reduced" }),
        Condition::Vte,
    );
    assert_eq!(result.padua_score, Some(9));
    assert_close(result.score, 0.9);
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.clinical_level, Some(RiskLevel::High));
}

#[test]
fn padua_does_not_read_pe_inside_other_words() {
    let result = assess(json!({ "pmh": ["hypertension"] }), Condition::Vte);
    assert_eq!(result.padua_score, Some(0));
}

#[test]
fn delirium_risk_factors_add_up() {
    let result = assess(
        json!({ "age": 85, "cognitive": "impaired", "pmh": ["previous delirium"] }),
        Condition::Delirium,
    );
    assert_close(result.score, 0.8);
    assert_eq!(
        codes(&result),
        vec!["age_80_plus", "cognitive_impairment", "previous_delirium"]
    );
}

#[test]
fn delirium_severe_illness_from_news2() {
    let result = assess(json!({ "vitals": { "news2": 6 } }), Condition::Delirium);
    assert_eq!(result.triggers[0].code, "severe_illness");
    assert_eq!(result.triggers[0].value, Some(6.0));
}

#[test]
fn falls_history_age_and_walking_aid() {
    let result = assess(
        json!({ "age": 70, "pmh": ["previous fall"], "mobility": "uses aid" }),
        Condition::Falls,
    );
    assert_close(result.score, 0.6);
    assert_eq!(result.level, RiskLevel::Moderate);
}

#[test]
fn pressure_ulcer_bedbound_takes_the_higher_tier_only() {
    let result = assess(
        json!({
            "age": 80, "mobility": "bedbound", "continence": "incontinent",
            "skinCondition": "fragile", "nutrition": "poor"
        }),
        Condition::PressureUlcer,
    );
    assert_close(result.score, 0.9);
    assert!(codes(&result).contains(&"bedbound"));
    assert!(!codes(&result).contains(&"reduced_mobility"));
}

#[test]
fn respiratory_failure_needs_observations() {
    let without = assess(
        json!({ "pmh": ["COPD"], "labs": { "ph": 7.2 } }),
        Condition::RespiratoryFailure,
    );
    assert_eq!(without.score, 0.0);
    assert!(without.factors.is_empty());

    let with = assess(
        json!({
            "pmh": ["COPD"],
            "vitals": { "spo2": 88, "rr": 28, "supplementalO2": true }
        }),
        Condition::RespiratoryFailure,
    );
    assert_close(with.score, 0.75);
    assert_eq!(with.level, RiskLevel::High);
}

#[test]
fn cardiac_arrest_indicators() {
    let result = assess(
        json!({ "vitals": { "news2": 9, "hr": 140, "systolicBp": 85, "avpu": "U" } }),
        Condition::CardiacArrest,
    );
    assert_close(result.score, 0.95);
    assert_eq!(result.triggers[0].code, "news2_9_plus");
    assert_eq!(result.triggers[0].value, Some(9.0));
}

#[test]
fn severe_hyperkalaemia_alone_is_moderate() {
    let result = assess(json!({ "labs": { "potassium": 6.2 } }), Condition::Electrolyte);
    assert_close(result.score, 0.4);
    assert_eq!(result.level, RiskLevel::Moderate);
    assert_eq!(result.triggers[0].value, Some(6.2));
}

#[test]
fn hypokalaemia_tiers() {
    let severe = assess(json!({ "labs": { "potassium": 2.8 } }), Condition::Electrolyte);
    assert_eq!(codes(&severe), vec!["severe_hypokalaemia"]);
    let mild = assess(json!({ "labs": { "potassium": 3.2 } }), Condition::Electrolyte);
    assert_eq!(codes(&mild), vec!["hypokalaemia"]);
}

#[test]
fn medication_harm_names_allergies_and_drug_classes() {
    let result = assess(
        json!({
            "age": 80,
            "labs": { "currentEgfr": 25 },
            "allergies": ["penicillin", "latex"],
            "medications": ["warfarin", "insulin glargine", "a", "b", "c", "d", "e", "f", "g", "h"]
        }),
        Condition::MedicationHarm,
    );
    assert_close(result.score, 0.8);
    assert!(result.factors.contains(&"Known allergies present (penicillin, latex)".to_string()));
    assert!(result.factors.contains(&"On high-risk medications (anticoagulants, insulin)".to_string()));
    assert_eq!(result.triggers[0].value, Some(10.0));
}

#[test]
fn must_raw_score_and_clinical_level_are_kept_alongside_the_band() {
    let result = assess(
        json!({ "bmi": 19, "weightLoss": "5-10%" }),
        Condition::Malnutrition,
    );
    assert_eq!(result.must_score, Some(2.0));
    assert_close(result.score, 2.0 / 6.0);
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.clinical_level, Some(RiskLevel::High));
}

#[test]
fn must_elderly_borderline_bmi_bonus() {
    let result = assess(json!({ "age": 80, "bmi": 22 }), Condition::Malnutrition);
    assert_eq!(result.must_score, Some(0.05));
    assert_eq!(codes(&result), vec!["elderly_borderline_bmi"]);
    assert_eq!(result.clinical_level, Some(RiskLevel::Low));
}

#[test]
fn hasbled_counts_one_point_per_item() {
    let result = assess(
        json!({
            "age": 70,
            "pmh": ["stroke", "liver disease"],
            "medications": ["aspirin (antiplatelet)"]
        }),
        Condition::Bleeding,
    );
    assert_eq!(result.hasbled_score, Some(4));
    assert_close(result.score, 4.0 / 9.0);
    assert_eq!(result.level, RiskLevel::Moderate);
    assert_eq!(result.clinical_level, Some(RiskLevel::High));
}

#[test]
fn hasbled_renal_from_history_when_no_egfr() {
    let result = assess(json!({ "pmh": ["renal disease"] }), Condition::Bleeding);
    assert_eq!(codes(&result), vec!["renal_disease"]);
    assert_eq!(result.triggers[0].value, None);
}

#[test]
fn non_aki_sepsis_assessors_ignore_mode() {
    let sink = kitchen_sink();
    let demo = compute_risks(&sink, Mode::Demo);
    let guideline = compute_risks(&sink, Mode::Guideline);
    for condition in Condition::ALL {
        if matches!(condition, Condition::Aki | Condition::Sepsis) {
            continue;
        }
        assert_eq!(demo.get(condition), guideline.get(condition), "{condition}");
    }
}

#[test]
fn only_aki_and_sepsis_report_demo_mode() {
    let report = compute_risks(&Patient::default(), Mode::Demo);
    for (condition, result) in &report.risks {
        let expected = match condition {
            Condition::Aki | Condition::Sepsis => Mode::Demo,
            _ => Mode::Guideline,
        };
        assert_eq!(result.mode, expected, "{condition:?}");
    }
}
