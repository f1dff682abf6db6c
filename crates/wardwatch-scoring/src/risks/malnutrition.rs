use wardwatch_core::{Condition, Mode, Patient, RiskLevel, RiskResult, WeightLoss};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Malnutrition Universal Screening Tool.
pub struct Must;

const GUIDELINE: &str = "NICE CG32 - Nutrition support (MUST score)";

/// Highest attainable MUST score: BMI 2, weight loss 2, acute disease 2.
const MAX_POINTS: f64 = 6.0;

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "bmi_below_18_5",
            points: 2.0,
            text: "BMI < 18.5 (underweight) (+2)",
            check: |p| Check::value(p.bmi, |bmi| bmi < 18.5),
        },
        Rule {
            code: "bmi_below_20",
            points: 1.0,
            text: "BMI < 20 (+1)",
            check: |p| Check::value(p.bmi, |bmi| bmi < 20.0),
        },
    ]),
    Step::FirstOf(&[
        Rule {
            code: "weight_loss_over_10",
            points: 2.0,
            text: "Weight loss > 10% in 3-6 months (+2)",
            check: |p| (p.weight_loss == Some(WeightLoss::OverTen)).into(),
        },
        Rule {
            code: "weight_loss_5_to_10",
            points: 1.0,
            text: "Weight loss 5-10% (+1)",
            check: |p| (p.weight_loss == Some(WeightLoss::FiveToTen)).into(),
        },
    ]),
    Step::Rule(Rule {
        code: "acute_disease",
        points: 2.0,
        text: "Acute disease with no nutritional intake >5 days (+2)",
        check: |p| p.acute_disease.into(),
    }),
    Step::Rule(Rule {
        code: "elderly_borderline_bmi",
        points: 0.05,
        text: "Elderly with borderline BMI",
        check: |p| (p.age_at_least(75) && p.bmi.is_some_and(|bmi| bmi < 23.0)).into(),
    }),
];

impl RiskAssessor for Must {
    fn condition(&self) -> Condition {
        Condition::Malnutrition
    }

    fn name(&self) -> &str {
        "Malnutrition"
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);

        let raw = tally.raw();
        RiskResult {
            must_score: Some(raw),
            clinical_level: Some(RiskLevel::from_cutoffs(raw, 1.0, 2.0)),
            ..tally.into_points_risk(Mode::Guideline, GUIDELINE, MAX_POINTS)
        }
    }
}
