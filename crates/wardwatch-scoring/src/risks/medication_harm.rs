use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Medication-related harm: polypharmacy, renal dosing, sensitivity and
/// high-risk drug classes.
pub struct MedicationHarm;

const GUIDELINE: &str = "Medication-related harm risk assessment";

/// Drug classes flagged as high risk, with the keywords that identify them.
const HIGH_RISK_CLASSES: &[(&str, &[&str])] = &[
    ("anticoagulants", &["warfarin", "anticoagulant"]),
    ("insulin", &["insulin"]),
    ("opioids", &["opioid"]),
];

fn medication_count(p: &Patient, at_least: usize) -> Check {
    let count = p.medications.len();
    if count >= at_least {
        Check::Observed(count as f64)
    } else {
        Check::Miss
    }
}

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "polypharmacy",
            points: 0.2,
            text: "Polypharmacy (≥ 10 medications) - interaction risk",
            check: |p| medication_count(p, 10),
        },
        Rule {
            code: "multiple_medications",
            points: 0.1,
            text: "Multiple medications (≥ 5) - moderate interaction risk",
            check: |p| medication_count(p, 5),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "severe_renal_impairment",
            points: 0.25,
            text: "Severe renal impairment (eGFR < 30) - dose adjustment needed",
            check: |p| Check::value(p.lab(|l| l.current_egfr), |e| e < 30.0),
        },
        Rule {
            code: "renal_impairment",
            points: 0.15,
            text: "Renal impairment (eGFR < 60) - some medications need adjustment",
            check: |p| Check::value(p.lab(|l| l.current_egfr), |e| e < 60.0),
        },
    ]),
    Step::Rule(Rule {
        code: "age_75_plus",
        points: 0.1,
        text: "Age ≥ 75 (increased sensitivity to medications)",
        check: |p| p.age_at_least(75).into(),
    }),
];

impl RiskAssessor for MedicationHarm {
    fn condition(&self) -> Condition {
        Condition::MedicationHarm
    }

    fn name(&self) -> &str {
        "Medication Harm"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);

        // These two name what was found, so they are built here rather
        // than in the table.
        if !patient.allergies.is_empty() {
            tally.add(
                0.1,
                "known_allergies",
                format!("Known allergies present ({})", patient.allergies.join(", ")),
            );
        }

        let classes: Vec<&str> = HIGH_RISK_CLASSES
            .iter()
            .filter(|(_, keywords)| patient.takes_any(keywords))
            .map(|(class, _)| *class)
            .collect();
        if !classes.is_empty() {
            tally.add(
                0.15,
                "high_risk_medication",
                format!("On high-risk medications ({})", classes.join(", ")),
            );
        }

        tally.into_risk(Mode::Guideline, GUIDELINE)
    }
}
