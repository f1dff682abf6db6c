use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Acute respiratory failure from bedside indicators.
pub struct RespiratoryFailure;

const GUIDELINE: &str = "Acute respiratory failure risk (clinical indicators)";

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "spo2_below_90",
            points: 0.3,
            text: "SpO₂ < 90% (severe hypoxia)",
            check: |p| Check::value(p.vital(|v| v.spo2), |s| s < 90.0),
        },
        Rule {
            code: "spo2_below_94",
            points: 0.2,
            text: "SpO₂ < 94% (hypoxia)",
            check: |p| Check::value(p.vital(|v| v.spo2), |s| s < 94.0),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "tachypnoea",
            points: 0.2,
            text: "Respiratory rate > 25/min (tachypnoea)",
            check: |p| Check::value(p.vital(|v| v.rr), |rr| rr > 25.0),
        },
        Rule {
            code: "bradypnoea",
            points: 0.3,
            text: "Respiratory rate < 10/min (concerning bradypnoea)",
            check: |p| Check::value(p.vital(|v| v.rr), |rr| rr < 10.0),
        },
    ]),
    Step::Rule(Rule {
        code: "supplemental_oxygen",
        points: 0.15,
        text: "Requiring supplemental oxygen",
        check: |p| p.vitals.as_ref().is_some_and(|v| v.supplemental_o2).into(),
    }),
    Step::Rule(Rule {
        code: "chronic_respiratory_disease",
        points: 0.1,
        text: "History of chronic respiratory disease",
        check: |p| p.has_any_history(&["copd", "asthma"]).into(),
    }),
    Step::Rule(Rule {
        code: "acidosis",
        points: 0.15,
        text: "Acidosis (pH < 7.35)",
        check: |p| Check::value(p.lab(|l| l.ph), |ph| ph < 7.35),
    }),
];

impl RiskAssessor for RespiratoryFailure {
    fn condition(&self) -> Condition {
        Condition::RespiratoryFailure
    }

    fn name(&self) -> &str {
        "Respiratory Failure"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        if patient.vitals.is_none() {
            return RiskResult::empty(Mode::Guideline, GUIDELINE);
        }

        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        tally.into_risk(Mode::Guideline, GUIDELINE)
    }
}
