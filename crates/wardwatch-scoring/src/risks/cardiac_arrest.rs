use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::news2::effective_news2;
use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// In-hospital cardiac arrest risk indicators.
pub struct CardiacArrest;

const GUIDELINE: &str = "National Cardiac Arrest Audit (NCAA) - Risk indicators";

fn news2_at_least(p: &Patient, threshold: u32) -> Check {
    match p.vitals.as_ref().map(effective_news2) {
        Some(score) if score >= threshold => Check::Observed(f64::from(score)),
        _ => Check::Miss,
    }
}

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "news2_9_plus",
            points: 0.4,
            text: "NEWS2 ≥ 9 (very high risk of deterioration)",
            check: |p| news2_at_least(p, 9),
        },
        Rule {
            code: "news2_7_plus",
            points: 0.3,
            text: "NEWS2 ≥ 7 (high risk of deterioration)",
            check: |p| news2_at_least(p, 7),
        },
        Rule {
            code: "news2_5_plus",
            points: 0.15,
            text: "NEWS2 ≥ 5 (increased risk)",
            check: |p| news2_at_least(p, 5),
        },
    ]),
    Step::Rule(Rule {
        code: "critical_heart_rate",
        points: 0.2,
        text: "Critical heart rate (brady/tachycardia)",
        check: |p| Check::value(p.vital(|v| v.hr), |hr| !(40.0..=130.0).contains(&hr)),
    }),
    Step::Rule(Rule {
        code: "hypotension",
        points: 0.2,
        text: "Systolic BP < 90 mmHg (hypotension)",
        check: |p| Check::value(p.vital(|v| v.systolic_bp), |sbp| sbp < 90.0),
    }),
    Step::Rule(Rule {
        code: "altered_consciousness",
        points: 0.15,
        text: "Altered consciousness (AVPU not Alert)",
        check: |p| p.vitals.as_ref().is_some_and(|v| !v.is_alert()).into(),
    }),
];

impl RiskAssessor for CardiacArrest {
    fn condition(&self) -> Condition {
        Condition::CardiacArrest
    }

    fn name(&self) -> &str {
        "Cardiac Arrest"
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
