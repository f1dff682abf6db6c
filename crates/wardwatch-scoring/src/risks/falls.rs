use wardwatch_core::{Condition, Mobility, Mode, Patient, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Inpatient falls risk (STRATIFY / Morse principles).
pub struct Falls;

const GUIDELINE: &str = "NICE CG161 - Falls in older people (STRATIFY)";

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "history_of_falls",
        points: 0.25,
        text: "History of falls",
        check: |p| p.has_any_history(&["previous fall", "falls risk"]).into(),
    }),
    Step::Rule(Rule {
        code: "age_65_plus",
        points: 0.15,
        text: "Age ≥ 65 years",
        check: |p| p.age_at_least(65).into(),
    }),
    Step::Rule(Rule {
        code: "impaired_mobility",
        points: 0.2,
        text: "Impaired mobility or requires walking aid",
        check: |p| matches!(p.mobility, Some(Mobility::Reduced | Mobility::UsesAid)).into(),
    }),
    Step::Rule(Rule {
        code: "cognitive_impairment",
        points: 0.15,
        text: "Cognitive impairment",
        check: |p| (p.has_impaired_cognition() || p.has_history("dementia")).into(),
    }),
    Step::Rule(Rule {
        code: "falls_risk_medication",
        points: 0.15,
        text: "On medications that increase fall risk",
        check: |p| {
            p.takes_any(&["diuretic", "hypotensive", "opioid", "benzodiazepine"])
                .into()
        },
    }),
    Step::Rule(Rule {
        code: "hypotension",
        points: 0.1,
        text: "Hypotension (postural instability risk)",
        check: |p| Check::value(p.vital(|v| v.systolic_bp), |sbp| sbp < 100.0),
    }),
];

impl RiskAssessor for Falls {
    fn condition(&self) -> Condition {
        Condition::Falls
    }

    fn name(&self) -> &str {
        "Falls"
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
