use wardwatch_core::{Confidence, DiagnosisResult, Patient};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Acute coronary syndrome from symptoms, troponin and ECG.
pub struct Acs;

const CONDITION: &str = "Acute Coronary Syndrome";
const GUIDELINE: &str = "NICE NG185 - Acute coronary syndromes";

const CHEST_PAIN: &[&str] = &["chest pain", "chest discomfort"];

fn troponin(p: &Patient, test: fn(f64) -> bool) -> Check {
    Check::value(p.lab(|l| l.troponin), test)
}

fn ecg_mentions(p: &Patient, keywords: &[&str]) -> Check {
    p.exam_findings
        .ecg
        .as_deref()
        .map(str::to_lowercase)
        .is_some_and(|ecg| keywords.iter().any(|k| ecg.contains(k)))
        .into()
}

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "chest_pain",
        points: 0.2,
        text: "Chest pain/discomfort present",
        check: |p| p.complaint_mentions_any(CHEST_PAIN).into(),
    }),
    Step::Rule(Rule {
        code: "radiating_pain",
        points: 0.1,
        text: "Pain radiating to arm/jaw",
        check: |p| {
            (p.complaint_mentions_any(CHEST_PAIN)
                && p.complaint_mentions_any(&["radiating", "arm", "jaw"]))
            .into()
        },
    }),
    Step::FirstOf(&[
        Rule {
            code: "troponin_above_50",
            points: 0.6,
            text: "Troponin significantly elevated ({} ng/L) - consistent with MI",
            check: |p| troponin(p, |t| t > 50.0),
        },
        Rule {
            code: "troponin_above_14",
            points: 0.3,
            text: "Troponin mildly elevated ({} ng/L)",
            check: |p| troponin(p, |t| t > 14.0),
        },
        Rule {
            code: "troponin_normal",
            points: 0.0,
            text: "Troponin normal ({} ng/L)",
            check: |p| troponin(p, |_| true),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "ecg_stemi",
            points: 0.8,
            text: "STEMI on ECG - emergency PCI indicated",
            check: |p| ecg_mentions(p, &["stemi", "st elevation"]),
        },
        Rule {
            code: "ecg_ischaemic",
            points: 0.3,
            text: "Ischaemic ECG changes present",
            check: |p| ecg_mentions(p, &["st depression", "t wave"]),
        },
        Rule {
            code: "ecg_normal",
            points: 0.0,
            text: "ECG normal",
            check: |p| ecg_mentions(p, &["normal"]),
        },
    ]),
    Step::Rule(Rule {
        code: "age_over_65",
        points: 0.05,
        text: "Age >65 - increased risk",
        check: |p| p.age_over(65).into(),
    }),
];

impl DiagnosisAssessor for Acs {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        if tally.is_empty() {
            return None;
        }

        let has_troponin = patient.lab(|l| l.troponin).is_some();
        let has_ecg = patient.exam_findings.ecg.is_some();
        Some(tally.into_diagnosis(
            CONDITION,
            GUIDELINE,
            Confidence::from_decisive(has_troponin && has_ecg),
        ))
    }
}
