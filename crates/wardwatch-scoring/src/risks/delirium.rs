use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::news2::effective_news2;
use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Delirium risk from 4AT / DELPHI risk factors.
pub struct Delirium;

const GUIDELINE: &str = "NICE CG103 - Delirium (4AT/DELPHI risk factors)";

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "age_80_plus",
            points: 0.3,
            text: "Age ≥ 80 years (high risk)",
            check: |p| p.age_at_least(80).into(),
        },
        Rule {
            code: "age_65_plus",
            points: 0.15,
            text: "Age ≥ 65 years (increased risk)",
            check: |p| p.age_at_least(65).into(),
        },
    ]),
    Step::Rule(Rule {
        code: "cognitive_impairment",
        points: 0.3,
        text: "Pre-existing cognitive impairment or dementia",
        check: |p| (p.has_history("dementia") || p.has_impaired_cognition()).into(),
    }),
    Step::Rule(Rule {
        code: "severe_illness",
        points: 0.2,
        text: "Severe illness (NEWS2 ≥ 5)",
        check: |p| {
            let news2 = p.vitals.as_ref().map(effective_news2);
            match news2 {
                Some(score) if score >= 5 => Check::Observed(f64::from(score)),
                _ => p.has_history("severe illness").into(),
            }
        },
    }),
    Step::Rule(Rule {
        code: "deliriogenic_medication",
        points: 0.15,
        text: "On medications associated with delirium risk",
        check: |p| p.takes_any(&["opioid", "benzodiazepine", "anticholinergic"]).into(),
    }),
    Step::Rule(Rule {
        code: "previous_delirium",
        points: 0.2,
        text: "Previous episode of delirium",
        check: |p| p.has_history("previous delirium").into(),
    }),
];

impl RiskAssessor for Delirium {
    fn condition(&self) -> Condition {
        Condition::Delirium
    }

    fn name(&self) -> &str {
        "Delirium"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        tally.into_risk(Mode::Guideline, GUIDELINE)
    }
}
