use wardwatch_core::{Avpu, Confidence, DiagnosisResult, Patient, RiskLevel};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Community-acquired pneumonia severity by CURB-65.
pub struct Pneumonia;

const CONDITION: &str = "Community-Acquired Pneumonia";
const GUIDELINE: &str = "NICE NG138 - Pneumonia (community-acquired): antimicrobial prescribing";

const RESPIRATORY_COMPLAINT: &[&str] = &["cough", "pneumonia", "sob", "chest"];

/// Systolic cut-off used for the B criterion. Matches qSOFA so that a
/// borderline systolic still counts when no diastolic was charted.
const LOW_SYSTOLIC: f64 = 100.0;
const LOW_DIASTOLIC: f64 = 60.0;

fn confused(p: &Patient) -> bool {
    p.complaint_mentions_any(&["confusion", "confused"])
        || p.exam_findings.has_confusion()
        || p.vitals.as_ref().and_then(|v| v.avpu) == Some(Avpu::Confusion)
}

/// C, U and R. B needs both pressures in its factor, so it is scored by
/// [`low_blood_pressure`].
static CURB65: &[Step] = &[
    Step::Rule(Rule {
        code: "confusion",
        points: 1.0,
        text: "Confusion present (+1 CURB-65)",
        check: |p| confused(p).into(),
    }),
    Step::Rule(Rule {
        code: "urea_above_7",
        points: 1.0,
        text: "Urea >7 mmol/L ({}) (+1 CURB-65)",
        check: |p| Check::value(p.lab(|l| l.urea), |u| u > 7.0),
    }),
    Step::Rule(Rule {
        code: "rr_30_plus",
        points: 1.0,
        text: "Respiratory rate ≥30 ({}) (+1 CURB-65)",
        check: |p| Check::value(p.vital(|v| v.rr), |rr| rr >= 30.0),
    }),
];

/// Criteria scored after blood pressure.
static CURB65_TAIL: &[Step] = &[
    Step::Rule(Rule {
        code: "age_65_plus",
        points: 1.0,
        text: "Age ≥65 (+1 CURB-65)",
        check: |p| p.age_at_least(65).into(),
    }),
    Step::Rule(Rule {
        code: "consolidation",
        points: 0.0,
        text: "Chest X-ray shows consolidation",
        check: |p| {
            p.exam_findings
                .chest_xray
                .as_deref()
                .is_some_and(|cxr| cxr.to_lowercase().contains("consolidation"))
                .into()
        },
    }),
];

fn low_blood_pressure(p: &Patient, tally: &mut Tally) {
    let sbp = p.vital(|v| v.systolic_bp);
    let dbp = p.vital(|v| v.diastolic_bp);
    if !(sbp.is_some_and(|v| v <= LOW_SYSTOLIC) || dbp.is_some_and(|v| v <= LOW_DIASTOLIC)) {
        return;
    }

    let shown = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    let text = format!("Low BP ({}/{}) (+1 CURB-65)", shown(sbp), shown(dbp));
    match sbp {
        Some(sbp) => tally.add_observed(1.0, "low_blood_pressure", sbp, text),
        None => tally.add(1.0, "low_blood_pressure", text),
    }
}

/// Normalized severity for a CURB-65 total.
fn severity(curb65: u32) -> (f64, &'static str, &'static str) {
    match curb65 {
        0 | 1 => (0.3, "low_severity", "Low severity - consider home treatment"),
        2 => (
            0.5,
            "moderate_severity",
            "Moderate severity - consider hospital admission",
        ),
        _ => (
            0.8,
            "high_severity",
            "High severity (CURB-65 ≥3) - hospital admission recommended",
        ),
    }
}

impl DiagnosisAssessor for Pneumonia {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let has_cxr = patient.exam_findings.chest_xray.is_some();
        let assessable = patient.complaint_mentions_any(RESPIRATORY_COMPLAINT)
            || has_cxr
            || patient.vital(|v| v.rr).is_some_and(|rr| rr >= 30.0);
        if !assessable {
            return None;
        }

        let mut tally = Tally::new();
        tally.apply(CURB65, patient);
        low_blood_pressure(patient, &mut tally);
        tally.apply(CURB65_TAIL, patient);

        let curb65 = tally.raw() as u32;
        let (score, code, text) = severity(curb65);
        tally.note(
            "curb65_score",
            Some(f64::from(curb65)),
            format!("CURB-65 score: {curb65}"),
        );
        tally.set_score(score);
        tally.note(code, None, text);

        let has_urea = patient.lab(|l| l.urea).is_some();
        Some(DiagnosisResult {
            curb65_score: Some(curb65),
            clinical_level: Some(RiskLevel::from_cutoffs(f64::from(curb65), 2.0, 3.0)),
            ..tally.into_diagnosis(
                CONDITION,
                GUIDELINE,
                Confidence::from_decisive(has_urea || has_cxr),
            )
        })
    }
}
