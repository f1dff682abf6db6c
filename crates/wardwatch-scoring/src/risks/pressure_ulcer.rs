use wardwatch_core::{
    Condition, Continence, Mobility, Mode, Nutrition, Patient, RiskResult, SkinCondition,
};

use crate::scoring::{Rule, Step, Tally};
use crate::RiskAssessor;

/// Pressure ulcer risk (Waterlow / Braden principles).
pub struct PressureUlcer;

const GUIDELINE: &str = "NICE CG179 - Pressure ulcers (Waterlow)";

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "bedbound",
            points: 0.3,
            text: "Bedbound (severely limited mobility)",
            check: |p| (p.mobility == Some(Mobility::Bedbound)).into(),
        },
        Rule {
            code: "reduced_mobility",
            points: 0.2,
            text: "Reduced mobility",
            check: |p| matches!(p.mobility, Some(Mobility::Reduced | Mobility::ChairBound)).into(),
        },
    ]),
    Step::Rule(Rule {
        code: "poor_nutrition",
        points: 0.2,
        text: "Poor nutrition or underweight (BMI < 18.5)",
        check: |p| {
            (p.nutrition == Some(Nutrition::Poor) || p.bmi.is_some_and(|bmi| bmi < 18.5)).into()
        },
    }),
    Step::Rule(Rule {
        code: "incontinence",
        points: 0.15,
        text: "Incontinence (moisture risk)",
        check: |p| (p.continence == Some(Continence::Incontinent)).into(),
    }),
    Step::Rule(Rule {
        code: "fragile_skin",
        points: 0.15,
        text: "Fragile or broken skin",
        check: |p| {
            matches!(
                p.skin_condition,
                Some(SkinCondition::Fragile | SkinCondition::Broken)
            )
            .into()
        },
    }),
    Step::Rule(Rule {
        code: "age_75_plus",
        points: 0.1,
        text: "Age ≥ 75 (skin fragility)",
        check: |p| p.age_at_least(75).into(),
    }),
];

impl RiskAssessor for PressureUlcer {
    fn condition(&self) -> Condition {
        Condition::PressureUlcer
    }

    fn name(&self) -> &str {
        "Pressure Ulcer"
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
