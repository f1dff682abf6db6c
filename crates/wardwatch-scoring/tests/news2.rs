use serde_json::json;
use wardwatch_core::{Avpu, Vitals};
use wardwatch_scoring::news2::{
    consciousness_score, effective_news2, parameter_score, News2Band, News2Parameter,
};
use wardwatch_scoring::{compute_news2, validate_vitals};

fn vitals(value: serde_json::Value) -> Vitals {
    serde_json::from_value(value).unwrap()
}

fn assert_scores(parameter: News2Parameter, cases: &[(f64, u32)]) {
    for &(value, expected) in cases {
        assert_eq!(
            parameter_score(parameter, value),
            expected,
            "{parameter:?} at {value}"
        );
    }
}

#[test]
fn respiration_rate_boundaries() {
    assert_scores(
        News2Parameter::RespirationRate,
        &[(8.0, 3), (9.0, 1), (11.0, 1), (12.0, 0), (20.0, 0), (21.0, 2), (24.0, 2), (25.0, 3)],
    );
}

#[test]
fn oxygen_saturation_boundaries() {
    assert_scores(
        News2Parameter::OxygenSaturation,
        &[(91.0, 3), (92.0, 2), (93.0, 2), (94.0, 1), (95.0, 1), (96.0, 0)],
    );
}

#[test]
fn temperature_boundaries() {
    assert_scores(
        News2Parameter::Temperature,
        &[(35.0, 3), (35.1, 1), (36.0, 1), (36.1, 0), (38.0, 0), (38.1, 1), (39.0, 1), (39.1, 2)],
    );
}

#[test]
fn systolic_bp_boundaries() {
    assert_scores(
        News2Parameter::SystolicBp,
        &[(90.0, 3), (91.0, 2), (100.0, 2), (101.0, 1), (110.0, 1), (111.0, 0), (219.0, 0), (220.0, 3)],
    );
}

#[test]
fn heart_rate_boundaries() {
    assert_scores(
        News2Parameter::HeartRate,
        &[
            (40.0, 3), (41.0, 1), (50.0, 1), (51.0, 0), (90.0, 0), (91.0, 1),
            (110.0, 1), (111.0, 2), (130.0, 2), (131.0, 3),
        ],
    );
}

#[test]
fn consciousness_scores_three_unless_alert() {
    assert_eq!(consciousness_score(None), 0);
    assert_eq!(consciousness_score(Some(Avpu::Alert)), 0);
    assert_eq!(consciousness_score(Some(Avpu::Confusion)), 3);
    assert_eq!(consciousness_score(Some(Avpu::Unresponsive)), 3);
    assert_eq!(consciousness_score(Some(Avpu::Unrecognised)), 3);
}

#[test]
fn band_boundaries() {
    assert_eq!(News2Band::from_total(0), News2Band::Low);
    assert_eq!(News2Band::from_total(2), News2Band::Low);
    assert_eq!(News2Band::from_total(3), News2Band::LowMedium);
    assert_eq!(News2Band::from_total(4), News2Band::LowMedium);
    assert_eq!(News2Band::from_total(5), News2Band::Medium);
    assert_eq!(News2Band::from_total(6), News2Band::Medium);
    assert_eq!(News2Band::from_total(7), News2Band::High);
}

#[test]
fn normal_observations_score_zero() {
    let result = compute_news2(&vitals(json!({
        "rr": 16, "spo2": 97, "temp": 37.0, "systolicBp": 120, "hr": 70, "avpu": "A"
    })));
    assert_eq!(result.total_score, 0);
    assert_eq!(result.risk_level, News2Band::Low);
    assert_eq!(result.clinical_response, "Continue routine NEWS monitoring.");
}

#[test]
fn missing_observations_score_zero() {
    let result = compute_news2(&Vitals::default());
    assert_eq!(result.total_score, 0);
    assert_eq!(result.individual_scores.sum(), 0);
}

#[test]
fn unwell_patient_totals_every_component() {
    let result = compute_news2(&vitals(json!({
        "rr": 26, "spo2": 90, "temp": 39.5, "systolicBp": 88, "hr": 135,
        "avpu": "C", "supplementalO2": true
    })));
    assert_eq!(result.individual_scores.respiration_rate, 3);
    assert_eq!(result.individual_scores.oxygen_saturation, 3);
    assert_eq!(result.individual_scores.temperature, 2);
    assert_eq!(result.individual_scores.systolic_bp, 3);
    assert_eq!(result.individual_scores.heart_rate, 3);
    assert_eq!(result.individual_scores.consciousness, 3);
    assert_eq!(result.oxygen_score, 2);
    assert_eq!(result.total_score, 19);
    assert_eq!(result.risk_level, News2Band::High);
}

#[test]
fn result_serializes_camel_case_with_kebab_band() {
    let result = compute_news2(&vitals(json!({ "rr": 22, "hr": 95 })));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["totalScore"], 3);
    assert_eq!(value["riskLevel"], "low-medium");
    assert_eq!(value["individualScores"]["respirationRate"], 2);
}

#[test]
fn charted_score_wins_over_computed() {
    let v = vitals(json!({ "rr": 30, "news2": 1 }));
    assert_eq!(effective_news2(&v), 1);
    let v = vitals(json!({ "rr": 30, "ews": 2 }));
    assert_eq!(effective_news2(&v), 2);
    let v = vitals(json!({ "rr": 30 }));
    assert_eq!(effective_news2(&v), 3);
}

#[test]
fn no_vitals_is_invalid() {
    let check = validate_vitals(None);
    assert!(!check.valid);
    assert_eq!(check.warnings, vec!["No vital signs data provided"]);
}

#[test]
fn implausible_values_warn_but_still_score() {
    let v = vitals(json!({ "rr": 70, "hr": 15, "spo2": 97 }));
    let check = validate_vitals(Some(&v));
    assert!(!check.valid);
    assert_eq!(
        check.warnings,
        vec![
            "Respiratory rate (70) is clinically unlikely",
            "Heart rate (15) is clinically unlikely",
        ]
    );
    // RR 70 → 3, HR 15 → 3.
    assert_eq!(compute_news2(&v).total_score, 6);
}

#[test]
fn plausible_bounds_are_inclusive() {
    let v = vitals(json!({ "rr": 5, "hr": 250, "temp": 43, "systolicBp": 40, "spo2": 100 }));
    let check = validate_vitals(Some(&v));
    assert!(check.valid);
    assert!(check.warnings.is_empty());
}
