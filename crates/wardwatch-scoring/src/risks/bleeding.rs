use wardwatch_core::{Condition, Mode, Patient, RiskLevel, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// HAS-BLED bleeding risk.
pub struct HasBled;

const GUIDELINE: &str = "HAS-BLED bleeding risk score";

const MAX_POINTS: f64 = 9.0;

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "hypertension",
        points: 1.0,
        text: "Hypertension (SBP > 160) (+1)",
        check: |p| Check::value(p.vital(|v| v.systolic_bp), |sbp| sbp > 160.0),
    }),
    Step::Rule(Rule {
        code: "renal_disease",
        points: 1.0,
        text: "Renal disease (eGFR < 60) (+1)",
        check: |p| match Check::value(p.lab(|l| l.current_egfr), |e| e < 60.0) {
            Check::Miss => p.has_history("renal disease").into(),
            observed => observed,
        },
    }),
    Step::Rule(Rule {
        code: "liver_disease",
        points: 1.0,
        text: "Liver disease (+1)",
        check: |p| p.has_history("liver disease").into(),
    }),
    Step::Rule(Rule {
        code: "stroke",
        points: 1.0,
        text: "History of stroke (+1)",
        check: |p| p.has_history("stroke").into(),
    }),
    Step::Rule(Rule {
        code: "bleeding_predisposition",
        points: 1.0,
        text: "Previous bleeding or predisposition (+1)",
        check: |p| p.has_any_history(&["previous bleed", "bleeding tendency"]).into(),
    }),
    Step::Rule(Rule {
        code: "labile_inr",
        points: 1.0,
        text: "Labile INR (INR > 3) (+1)",
        check: |p| Check::value(p.lab(|l| l.inr), |inr| inr > 3.0),
    }),
    Step::Rule(Rule {
        code: "age_65_plus",
        points: 1.0,
        text: "Age ≥ 65 (+1)",
        check: |p| p.age_at_least(65).into(),
    }),
    Step::Rule(Rule {
        code: "nsaid_or_antiplatelet",
        points: 1.0,
        text: "On NSAIDs or antiplatelet drugs (+1)",
        check: |p| p.takes_any(&["nsaid", "antiplatelet"]).into(),
    }),
    Step::Rule(Rule {
        code: "alcohol_excess",
        points: 1.0,
        text: "Alcohol excess (+1)",
        check: |p| (p.takes_any(&["alcohol"]) || p.has_history("alcohol excess")).into(),
    }),
];

impl RiskAssessor for HasBled {
    fn condition(&self) -> Condition {
        Condition::Bleeding
    }

    fn name(&self) -> &str {
        "Bleeding"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);

        let raw = tally.raw();
        RiskResult {
            hasbled_score: Some(raw as u32),
            clinical_level: Some(RiskLevel::from_cutoffs(raw, 1.0, 3.0)),
            ..tally.into_points_risk(Mode::Guideline, GUIDELINE, MAX_POINTS)
        }
    }
}
