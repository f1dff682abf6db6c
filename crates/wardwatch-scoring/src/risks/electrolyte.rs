use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Potassium and sodium disturbance.
pub struct Electrolyte;

const GUIDELINE: &str = "Electrolyte disturbance risk assessment";

fn potassium(p: &Patient, test: fn(f64) -> bool) -> Check {
    Check::value(p.lab(|l| l.potassium), test)
}

fn sodium(p: &Patient, test: fn(f64) -> bool) -> Check {
    Check::value(p.lab(|l| l.sodium), test)
}

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "severe_hyperkalaemia",
            points: 0.4,
            text: "Severe hyperkalaemia (K ≥ 6.0) - arrhythmia risk",
            check: |p| potassium(p, |k| k >= 6.0),
        },
        Rule {
            code: "hyperkalaemia",
            points: 0.25,
            text: "Hyperkalaemia (K ≥ 5.5)",
            check: |p| potassium(p, |k| k >= 5.5),
        },
        Rule {
            code: "severe_hypokalaemia",
            points: 0.3,
            text: "Severe hypokalaemia (K < 3.0) - arrhythmia risk",
            check: |p| potassium(p, |k| k < 3.0),
        },
        Rule {
            code: "hypokalaemia",
            points: 0.15,
            text: "Hypokalaemia (K < 3.5)",
            check: |p| potassium(p, |k| k < 3.5),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "severe_hyponatraemia",
            points: 0.3,
            text: "Severe hyponatraemia (Na < 125) - seizure risk",
            check: |p| sodium(p, |na| na < 125.0),
        },
        Rule {
            code: "hyponatraemia",
            points: 0.1,
            text: "Hyponatraemia (Na < 135)",
            check: |p| sodium(p, |na| na < 135.0),
        },
        Rule {
            code: "hypernatraemia",
            points: 0.2,
            text: "Hypernatraemia (Na > 150)",
            check: |p| sodium(p, |na| na > 150.0),
        },
    ]),
    Step::Rule(Rule {
        code: "diuretic",
        points: 0.05,
        text: "On diuretics (electrolyte loss risk)",
        check: |p| p.takes_any(&["diuretic"]).into(),
    }),
];

impl RiskAssessor for Electrolyte {
    fn condition(&self) -> Condition {
        Condition::Electrolyte
    }

    fn name(&self) -> &str {
        "Electrolyte Disturbance"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        // Without a lab panel there is nothing to grade.
        if patient.labs.is_none() {
            return RiskResult::empty(Mode::Guideline, GUIDELINE);
        }

        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        tally.into_risk(Mode::Guideline, GUIDELINE)
    }
}
