use wardwatch_core::{Confidence, DiagnosisResult, Patient};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Heart failure from NT-proBNP, symptoms and echo.
pub struct HeartFailure;

const CONDITION: &str = "Heart Failure";
const GUIDELINE: &str = "NICE NG106 - Chronic heart failure in adults";

const DYSPNOEA: &[&str] = &["sob", "shortness of breath", "breathless"];
const OEDEMA: &[&str] = &["oedema", "swelling"];

fn nt_pro_bnp(p: &Patient, test: fn(f64) -> bool) -> Check {
    Check::value(p.lab(|l| l.nt_pro_bnp), test)
}

fn lvef(p: &Patient, test: fn(f64) -> bool) -> Check {
    Check::value(p.exam_findings.lvef, test)
}

static RULES: &[Step] = &[
    Step::FirstOf(&[
        Rule {
            code: "nt_pro_bnp_above_2000",
            points: 0.6,
            text: "NT-proBNP >2000 pg/mL ({}) - high probability",
            check: |p| nt_pro_bnp(p, |v| v > 2000.0),
        },
        Rule {
            code: "nt_pro_bnp_above_400",
            points: 0.3,
            text: "NT-proBNP 400-2000 pg/mL ({}) - intermediate",
            check: |p| nt_pro_bnp(p, |v| v > 400.0),
        },
        Rule {
            code: "nt_pro_bnp_below_400",
            points: 0.0,
            text: "NT-proBNP <400 pg/mL ({}) - HF unlikely",
            check: |p| nt_pro_bnp(p, |_| true),
        },
    ]),
    Step::Rule(Rule {
        code: "dyspnoea",
        points: 0.15,
        text: "Dyspnoea present",
        check: |p| p.complaint_mentions_any(DYSPNOEA).into(),
    }),
    Step::Rule(Rule {
        code: "peripheral_oedema",
        points: 0.1,
        text: "Peripheral oedema noted",
        check: |p| p.complaint_mentions_any(OEDEMA).into(),
    }),
    Step::FirstOf(&[
        Rule {
            code: "lvef_below_40",
            points: 0.4,
            text: "Reduced LVEF <40% ({}%) - HFrEF",
            check: |p| lvef(p, |v| v < 40.0),
        },
        Rule {
            code: "lvef_40_to_49",
            points: 0.2,
            text: "LVEF 40-49% ({}%) - HFmrEF",
            check: |p| lvef(p, |v| v < 50.0),
        },
        Rule {
            code: "lvef_preserved",
            points: 0.0,
            text: "LVEF ≥50% ({}%) - preserved",
            check: |p| lvef(p, |_| true),
        },
    ]),
    Step::Rule(Rule {
        code: "tachypnoea",
        points: 0.05,
        text: "Tachypnoea present (RR {} > 20)",
        check: |p| Check::value(p.vital(|v| v.rr), |rr| rr > 20.0),
    }),
];

impl DiagnosisAssessor for HeartFailure {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);
        if tally.is_empty() {
            return None;
        }

        let has_bnp = patient.lab(|l| l.nt_pro_bnp).is_some();
        Some(tally.into_diagnosis(CONDITION, GUIDELINE, Confidence::from_decisive(has_bnp)))
    }
}
