use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::news2::effective_news2;
use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sepsis {
    /// Weighted sum of abnormal labs, vitals and complaint.
    Demo,
    /// NICE NG51 stratification by NEWS2 band when infection is suspected.
    Guideline,
}

const DEMO_GUIDELINE: &str = "Demo heuristic (not guideline-based)";
const GUIDELINE: &str = "NICE NG51 sepsis risk stratification using NEWS2 (simplified)";

const INFECTION_KEYWORDS: &[&str] = &[
    "infection",
    "pneumonia",
    "sepsis",
    "cellulitis",
    "uti",
    "fever",
    "flu",
];

fn abnormal_wbc(p: &Patient) -> Check {
    Check::value(p.lab(|l| l.wbc), |v| !(4.0..=12.0).contains(&v))
}

fn news2(p: &Patient) -> Option<u32> {
    p.vitals.as_ref().map(effective_news2)
}

static DEMO_RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "wbc_abnormal",
        points: 0.2,
        text: "Abnormal WBC (demo rule)",
        check: abnormal_wbc,
    }),
    Step::Rule(Rule {
        code: "crp_100_plus",
        points: 0.2,
        text: "CRP ≥ 100 (demo rule)",
        check: |p| Check::value(p.lab(|l| l.crp), |v| v >= 100.0),
    }),
    Step::Rule(Rule {
        code: "news2_3_plus",
        points: 0.2,
        text: "NEWS2/EWS ≥ 3 (demo rule)",
        check: |p| Check::value(news2(p).map(f64::from), |v| v >= 3.0),
    }),
    Step::Rule(Rule {
        code: "temperature_abnormal",
        points: 0.1,
        text: "Abnormal temperature (demo rule)",
        check: |p| Check::value(p.vital(|v| v.temp), |t| t >= 38.3 || t <= 36.0),
    }),
    Step::Rule(Rule {
        code: "rr_22_plus",
        points: 0.1,
        text: "Respiratory rate ≥ 22 (demo rule)",
        check: |p| Check::value(p.vital(|v| v.rr), |rr| rr >= 22.0),
    }),
    Step::Rule(Rule {
        code: "infective_complaint",
        points: 0.1,
        text: "Infective-type presenting complaint (demo rule)",
        check: |p| p.complaint_mentions_any(&["infection", "pneumonia", "fever"]).into(),
    }),
    Step::Rule(Rule {
        code: "age_65_plus",
        points: 0.1,
        text: "Age ≥ 65 (demo rule)",
        check: |p| p.age_at_least(65).into(),
    }),
];

impl Sepsis {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Demo => Sepsis::Demo,
            Mode::Guideline => Sepsis::Guideline,
        }
    }

    fn assess_demo(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(DEMO_RULES, patient);
        tally.into_risk(Mode::Demo, DEMO_GUIDELINE)
    }

    fn assess_guideline(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        let news2 = news2(patient);
        let has_complaint = !patient.presenting_complaint.trim().is_empty();

        // Banding needs at least a complaint or observations to work from.
        if has_complaint || news2.is_some() {
            let score = news2.unwrap_or(0);
            let value = Some(f64::from(score));
            let infection_like = patient.complaint_mentions_any(INFECTION_KEYWORDS);

            if infection_like {
                tally.note(
                    "infection_suspected",
                    None,
                    "Presenting complaint suggests possible infection",
                );
            } else {
                tally.note(
                    "infection_not_suggested",
                    None,
                    "Presenting complaint does not clearly suggest infection",
                );
            }

            if infection_like && score >= 7 {
                tally.set_score(0.9);
                tally.note(
                    "news2_7_plus_with_infection",
                    value,
                    "NEWS2 ≥ 7 with suspected infection (high risk band)",
                );
            } else if infection_like && score >= 5 {
                tally.set_score(0.6);
                tally.note(
                    "news2_5_to_6_with_infection",
                    value,
                    "NEWS2 5–6 with suspected infection (moderate risk band)",
                );
            } else if infection_like && score > 0 {
                tally.set_score(0.35);
                tally.note(
                    "news2_below_5_with_infection",
                    value,
                    "Infection suspected but NEWS2 < 5 (lower NEWS2 band)",
                );
            } else {
                tally.set_score(0.1);
                tally.note(
                    "no_strong_indicators",
                    value,
                    "No strong indicators of sepsis risk in this simplified model",
                );
            }
        }

        // Supporting labs add a little weight on top of the band; the sum
        // may exceed 1 before clamping.
        if let Some(crp) = patient.lab(|l| l.crp).filter(|v| *v >= 100.0) {
            tally.add_observed(
                0.05,
                "crp_100_plus",
                crp,
                "CRP ≥ 100 (supports significant inflammatory process)",
            );
        }
        if let Check::Observed(wbc) = abnormal_wbc(patient) {
            tally.add_observed(
                0.05,
                "wbc_abnormal",
                wbc,
                "Abnormal WBC (supports systemic response)",
            );
        }

        tally.into_risk(Mode::Guideline, GUIDELINE)
    }
}

impl RiskAssessor for Sepsis {
    fn condition(&self) -> Condition {
        Condition::Sepsis
    }

    fn name(&self) -> &str {
        "Sepsis"
    }

    fn guideline(&self) -> &str {
        match self {
            Sepsis::Demo => DEMO_GUIDELINE,
            Sepsis::Guideline => GUIDELINE,
        }
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        match self {
            Sepsis::Demo => self.assess_demo(patient),
            Sepsis::Guideline => self.assess_guideline(patient),
        }
    }
}
