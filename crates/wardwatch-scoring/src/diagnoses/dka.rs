use wardwatch_core::{Confidence, DiagnosisResult, Patient};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Diabetic ketoacidosis from glucose, ketones and acid-base status.
pub struct Dka;

const CONDITION: &str = "Diabetic Ketoacidosis";
const GUIDELINE: &str = "NICE NG18 - Diabetes (type 1 and type 2) in children and young people";

const GLUCOSE_THRESHOLD: f64 = 11.0;
const KETONE_THRESHOLD: f64 = 3.0;
const PH_THRESHOLD: f64 = 7.3;

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "hyperglycaemia",
        points: 0.3,
        text: "Blood glucose >11 mmol/L ({})",
        check: |p| Check::value(p.lab(|l| l.glucose), |g| g > GLUCOSE_THRESHOLD),
    }),
    Step::FirstOf(&[
        Rule {
            code: "ketones_above_3",
            points: 0.4,
            text: "Blood ketones >3 mmol/L ({}) - significant ketonaemia",
            check: |p| Check::value(p.lab(|l| l.ketones), |k| k > KETONE_THRESHOLD),
        },
        Rule {
            code: "ketones_above_1_5",
            points: 0.2,
            text: "Blood ketones 1.5-3 mmol/L ({})",
            check: |p| Check::value(p.lab(|l| l.ketones), |k| k > 1.5),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "ph_below_7_3",
            points: 0.4,
            text: "pH <7.3 ({}) - significant acidosis",
            check: |p| Check::value(p.lab(|l| l.ph), |ph| ph < PH_THRESHOLD),
        },
        Rule {
            code: "ph_below_7_35",
            points: 0.2,
            text: "pH <7.35 ({}) - mild acidosis",
            check: |p| Check::value(p.lab(|l| l.ph), |ph| ph < 7.35),
        },
    ]),
    Step::Rule(Rule {
        code: "low_bicarbonate",
        points: 0.2,
        text: "Bicarbonate <15 mmol/L ({})",
        check: |p| Check::value(p.lab(|l| l.bicarbonate), |b| b < 15.0),
    }),
    Step::Rule(Rule {
        code: "gi_symptoms",
        points: 0.05,
        text: "GI symptoms present",
        check: |p| p.complaint_mentions_any(&["vomit", "nausea", "abdo pain"]).into(),
    }),
];

impl DiagnosisAssessor for Dka {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let glucose = patient.lab(|l| l.glucose);
        let ketones = patient.lab(|l| l.ketones);
        let ph = patient.lab(|l| l.ph);
        if glucose.is_none() && ketones.is_none() && ph.is_none() {
            return None;
        }

        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        if tally.is_empty() {
            return None;
        }

        let criteria_met = glucose.is_some_and(|g| g > GLUCOSE_THRESHOLD)
            && ketones.is_some_and(|k| k > KETONE_THRESHOLD)
            && ph.is_some_and(|ph| ph < PH_THRESHOLD);
        if criteria_met {
            tally.note(
                "dka_criteria_met",
                None,
                "DKA criteria met - urgent treatment required",
            );
        }

        Some(DiagnosisResult {
            criteria_met: Some(criteria_met),
            ..tally.into_diagnosis(
                CONDITION,
                GUIDELINE,
                Confidence::from_decisive(ketones.is_some()),
            )
        })
    }
}
