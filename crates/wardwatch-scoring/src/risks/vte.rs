use wardwatch_core::{Condition, Mobility, Mode, Patient, RiskLevel, RiskResult};

use crate::scoring::{Rule, Step, Tally};
use crate::RiskAssessor;

/// Padua Prediction Score for venous thromboembolism.
pub struct Padua;

const GUIDELINE: &str = "NICE NG89 - VTE Prevention (Padua Score)";

/// Raw points are divided by this to normalize.
const NORMALIZER: f64 = 10.0;

fn prior_vte(p: &Patient) -> bool {
    ["dvt", "pe", "vte", "thrombophilia"]
        .iter()
        .any(|word| p.history_mentions_word(word))
}

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "active_cancer",
        points: 3.0,
        text: "Active cancer (+3)",
        check: |p| p.has_history("cancer").into(),
    }),
    Step::Rule(Rule {
        code: "previous_vte",
        points: 3.0,
        text: "Previous VTE or thrombophilia (+3)",
        check: |p| prior_vte(p).into(),
    }),
    Step::Rule(Rule {
        code: "reduced_mobility",
        points: 3.0,
        text: "Reduced mobility (+3)",
        check: |p| matches!(p.mobility, Some(Mobility::Reduced | Mobility::Bedbound)).into(),
    }),
    Step::Rule(Rule {
        code: "thrombophilia",
        points: 3.0,
        text: "Known thrombophilic condition (+3)",
        check: |p| p.has_history("thrombophilia").into(),
    }),
    Step::Rule(Rule {
        code: "recent_trauma_or_surgery",
        points: 2.0,
        text: "Recent trauma or surgery (+2)",
        check: |p| p.exam_findings.has_recent_trauma_or_surgery().into(),
    }),
    Step::Rule(Rule {
        code: "age_70_plus",
        points: 1.0,
        text: "Age ≥ 70 (+1)",
        check: |p| p.age_at_least(70).into(),
    }),
    Step::Rule(Rule {
        code: "heart_or_respiratory_failure",
        points: 1.0,
        text: "Heart or respiratory failure (+1)",
        check: |p| p.has_any_history(&["heart failure", "respiratory failure"]).into(),
    }),
    Step::Rule(Rule {
        code: "acute_mi_or_stroke",
        points: 1.0,
        text: "Acute MI or stroke (+1)",
        check: |p| p.has_any_history(&["acute mi", "stroke"]).into(),
    }),
];

impl RiskAssessor for Padua {
    fn condition(&self) -> Condition {
        Condition::Vte
    }

    fn name(&self) -> &str {
        "Venous Thromboembolism"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);

        let raw = tally.raw();
        RiskResult {
            padua_score: Some(raw as u32),
            clinical_level: Some(RiskLevel::from_cutoffs(raw, 2.0, 4.0)),
            ..tally.into_points_risk(Mode::Guideline, GUIDELINE, NORMALIZER)
        }
    }
}
