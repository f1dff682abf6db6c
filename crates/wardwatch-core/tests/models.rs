use serde_json::json;
use wardwatch_core::error::CoreError;
use wardwatch_core::{
    clamp_score, Avpu, Condition, Mobility, Mode, Patient, RiskLevel, WeightLoss,
};

fn patient(value: serde_json::Value) -> Patient {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_object_is_a_valid_patient() {
    let p = patient(json!({}));
    assert_eq!(p, Patient::default());
    assert!(p.vitals.is_none());
    assert!(p.labs.is_none());
    assert!(p.exam_findings.notes.is_empty());
}

#[test]
fn pmh_is_accepted_as_past_medical_history() {
    let p = patient(json!({ "pmh": ["COPD", "previous DVT"] }));
    assert_eq!(p.past_medical_history, vec!["COPD", "previous DVT"]);
    assert!(p.has_history("copd"));
    assert!(p.history_mentions_word("dvt"));
}

#[test]
fn history_word_match_does_not_find_pe_in_hypertension() {
    let p = patient(json!({ "pastMedicalHistory": ["hypertension"] }));
    assert!(!p.history_mentions_word("pe"));
}

#[test]
fn exam_findings_as_tags_become_notes() {
    let p = patient(json!({ "examFindings": ["recent surgery", "leg swelling"] }));
    assert_eq!(p.exam_findings.notes.len(), 2);
    assert!(p.exam_findings.has_recent_trauma_or_surgery());
    assert!(p.exam_findings.has_dvt_signs());
    assert!(!p.exam_findings.has_confusion());
}

#[test]
fn structured_exam_findings_deserialize() {
    let p = patient(json!({
        "examFindings": { "ecg": "ST elevation V1-V4", "lvef": 35, "confusion": true }
    }));
    assert_eq!(p.exam_findings.ecg.as_deref(), Some("ST elevation V1-V4"));
    assert_eq!(p.exam_findings.lvef, Some(35.0));
    assert!(p.exam_findings.has_confusion());
}

#[test]
fn vitals_accept_avpu_letters_and_supplemental_oxygen() {
    let p = patient(json!({
        "vitals": { "rr": 22, "avpu": "V", "supplementalO2": true, "news2": 6 }
    }));
    let vitals = p.vitals.unwrap();
    assert_eq!(vitals.avpu, Some(Avpu::Voice));
    assert!(vitals.supplemental_o2);
    assert!(!vitals.is_alert());
    assert_eq!(vitals.charted_score(), Some(6));
}

#[test]
fn nt_pro_bnp_uses_its_clinical_spelling() {
    let p = patient(json!({ "labs": { "ntProBNP": 2500 } }));
    assert_eq!(p.lab(|l| l.nt_pro_bnp), Some(2500.0));
}

#[test]
fn unrecognised_mobility_is_other() {
    let p = patient(json!({ "mobility": "hoist" }));
    assert_eq!(p.mobility, Some(Mobility::Other));
    let p = patient(json!({ "mobility": "uses aid" }));
    assert_eq!(p.mobility, Some(Mobility::UsesAid));
}

#[test]
fn weight_loss_bands() {
    let p = patient(json!({ "weightLoss": ">10%" }));
    assert_eq!(p.weight_loss, Some(WeightLoss::OverTen));
    assert_eq!(WeightLoss::from_percent(12.0), WeightLoss::OverTen);
    assert_eq!(WeightLoss::from_percent(5.0), WeightLoss::FiveToTen);
    assert_eq!(WeightLoss::from_percent(2.0), WeightLoss::UnderFive);
}

#[test]
fn weight_loss_accepts_percentages_and_unknown_labels() {
    assert_eq!(patient(json!({ "weightLoss": 12 })).weight_loss, Some(WeightLoss::OverTen));
    assert_eq!(patient(json!({ "weightLoss": 7.5 })).weight_loss, Some(WeightLoss::FiveToTen));
    assert_eq!(patient(json!({ "weightLoss": "3%" })).weight_loss, Some(WeightLoss::UnderFive));
    assert_eq!(patient(json!({ "weightLoss": "none" })).weight_loss, Some(WeightLoss::Other));
    assert_eq!(patient(json!({ "weightLoss": null })).weight_loss, None);
}

#[test]
fn null_fields_read_as_defaults() {
    let p = patient(json!({
        "presentingComplaint": null,
        "pmh": null,
        "medications": null,
        "allergies": null,
        "acuteDisease": null,
        "examFindings": { "confusion": null, "notes": null },
        "vitals": { "supplementalO2": null, "news2": null }
    }));
    assert_eq!(p.presenting_complaint, "");
    assert!(p.past_medical_history.is_empty());
    assert!(p.medications.is_empty());
    assert!(p.allergies.is_empty());
    assert!(!p.acute_disease);
    assert!(!p.exam_findings.confusion);
    let vitals = p.vitals.unwrap();
    assert!(!vitals.supplemental_o2);
    assert_eq!(vitals.news2, None);
}

#[test]
fn charted_scores_and_age_accept_whole_floats() {
    let p = patient(json!({
        "age": 81.0,
        "vitals": { "news2": 5.0, "ews": "3" }
    }));
    assert_eq!(p.age, Some(81));
    let vitals = p.vitals.unwrap();
    assert_eq!(vitals.news2, Some(5));
    assert_eq!(vitals.ews, Some(3));

    let p = patient(json!({ "age": -4, "vitals": { "news2": "high" } }));
    assert_eq!(p.age, None);
    assert_eq!(p.vitals.unwrap().news2, None);
}

#[test]
fn unrecognised_avpu_is_not_alert() {
    let p = patient(json!({ "vitals": { "avpu": "drowsy" } }));
    let vitals = p.vitals.unwrap();
    assert_eq!(vitals.avpu, Some(Avpu::Unrecognised));
    assert!(!vitals.is_alert());
}

#[test]
fn medications_match_case_insensitively() {
    let p = patient(json!({ "medications": ["Ramipril 5mg", "Furosemide (loop diuretic)"] }));
    assert!(p.takes_any(&["pril"]));
    assert!(p.takes_any(&["diuretic"]));
    assert!(!p.takes_any(&["insulin"]));
}

#[test]
fn mode_parses_known_values_only() {
    assert_eq!("demo".parse::<Mode>().unwrap(), Mode::Demo);
    assert_eq!("guideline".parse::<Mode>().unwrap(), Mode::Guideline);
    assert_eq!(Mode::default(), Mode::Guideline);

    let err = "audit".parse::<Mode>().unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedMode(ref m) if m == "audit"));
}

#[test]
fn condition_names_round_trip_through_from_str() {
    for condition in Condition::ALL {
        assert_eq!(condition.key().parse::<Condition>().unwrap(), condition);
    }
    assert_eq!("PRESSUREULCER".parse::<Condition>().unwrap(), Condition::PressureUlcer);
    assert!(matches!(
        "gout".parse::<Condition>(),
        Err(CoreError::UnknownCondition(_))
    ));
}

#[test]
fn condition_serializes_as_camel_case() {
    assert_eq!(
        serde_json::to_value(Condition::RespiratoryFailure).unwrap(),
        json!("respiratoryFailure")
    );
}

#[test]
fn band_thresholds() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.399), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.4), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(0.699), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(0.7), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
}

#[test]
fn clinical_cutoffs_band_raw_scores() {
    assert_eq!(RiskLevel::from_cutoffs(0.0, 1.0, 3.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_cutoffs(2.0, 1.0, 3.0), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_cutoffs(3.0, 1.0, 3.0), RiskLevel::High);
}

#[test]
fn clamp_keeps_scores_in_unit_interval() {
    assert_eq!(clamp_score(1.3), 1.0);
    assert_eq!(clamp_score(-0.2), 0.0);
    assert_eq!(clamp_score(f64::NAN), 0.0);
    assert_eq!(clamp_score(0.55), 0.55);
}
