use wardwatch_core::{Condition, Mode, Patient, RiskResult};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::RiskAssessor;

/// Acute kidney injury. Two rule sets share the condition; the mode picks
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aki {
    /// Weighted eGFR heuristic.
    Demo,
    /// Creatinine staging, simplified KDIGO / NICE NG148.
    Guideline,
}

const DEMO_GUIDELINE: &str = "Demo heuristic (not guideline-based)";
const GUIDELINE: &str = "NICE NG148 / NHSE AKI algorithm (simplified)";

/// Absolute creatinine rise (µmol/L) that meets stage 1 on its own.
const ABSOLUTE_RISE: f64 = 26.0;
/// Current creatinine (µmol/L) that is stage 3 regardless of baseline.
const STAGE_3_CREATININE: f64 = 353.0;

static DEMO_RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "egfr_below_60",
        points: 0.4,
        text: "Current eGFR < 60 (demo rule)",
        check: |p| Check::value(p.lab(|l| l.current_egfr), |v| v < 60.0),
    }),
    Step::Rule(Rule {
        code: "egfr_fall_from_baseline",
        points: 0.3,
        text: "eGFR has fallen >25% from baseline (demo rule)",
        check: |p| Check::value(egfr_fall(p), |fall| fall > 0.25),
    }),
    Step::Rule(Rule {
        code: "ace_inhibitor_or_diuretic",
        points: 0.2,
        text: "On ACE inhibitor/diuretic (demo rule)",
        check: |p| p.takes_any(&["pril", "diuretic"]).into(),
    }),
    Step::Rule(Rule {
        code: "age_65_plus",
        points: 0.1,
        text: "Age ≥ 65 (demo rule)",
        check: |p| p.age_at_least(65).into(),
    }),
];

/// Fractional fall in eGFR from baseline, when both are known.
fn egfr_fall(p: &Patient) -> Option<f64> {
    let baseline = p.lab(|l| l.baseline_egfr).filter(|b| *b > 0.0)?;
    let current = p.lab(|l| l.current_egfr)?;
    Some((baseline - current) / baseline)
}

impl Aki {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Demo => Aki::Demo,
            Mode::Guideline => Aki::Guideline,
        }
    }

    fn assess_demo(&self, patient: &Patient) -> RiskResult {
        let mut tally = Tally::new();
        tally.apply(DEMO_RULES, patient);
        tally.into_risk(Mode::Demo, DEMO_GUIDELINE)
    }

    fn assess_guideline(&self, patient: &Patient) -> RiskResult {
        let baseline = patient.lab(|l| l.baseline_creatinine).filter(|b| *b > 0.0);
        let current = patient.lab(|l| l.current_creatinine);

        let (Some(baseline), Some(current)) = (baseline, current) else {
            return RiskResult {
                stage: Some(0),
                ..RiskResult::empty(Mode::Guideline, GUIDELINE)
            };
        };

        let mut tally = Tally::new();
        let stage = stage(baseline, current, &mut tally);
        tally.set_score(stage_score(stage));

        RiskResult {
            stage: Some(stage),
            ..tally.into_risk(Mode::Guideline, GUIDELINE)
        }
    }
}

/// KDIGO stage from baseline and current creatinine, recording each
/// criterion met.
fn stage(baseline: f64, current: f64, tally: &mut Tally) -> u8 {
    let rise = current - baseline;
    let ratio = current / baseline;

    if rise < ABSOLUTE_RISE && ratio < 1.5 {
        tally.note(
            "creatinine_below_criteria",
            Some(ratio),
            "Creatinine change does not meet AKI criteria",
        );
        return 0;
    }

    tally.note(
        "creatinine_rise",
        Some(ratio),
        "Creatinine rise meets AKI criteria (≥26 µmol/L or ≥1.5× baseline)",
    );

    if ratio >= 3.0 || current >= STAGE_3_CREATININE {
        tally.note(
            "creatinine_3x_baseline",
            Some(current),
            "Creatinine ≥3× baseline or ≥353 µmol/L (AKI stage 3 range)",
        );
        3
    } else if ratio >= 2.0 {
        tally.note(
            "creatinine_2x_baseline",
            Some(ratio),
            "Creatinine 2.0–2.9× baseline (AKI stage 2 range)",
        );
        2
    } else {
        1
    }
}

fn stage_score(stage: u8) -> f64 {
    match stage {
        1 => 0.5,
        2 => 0.75,
        3 => 0.95,
        _ => 0.0,
    }
}

impl RiskAssessor for Aki {
    fn condition(&self) -> Condition {
        Condition::Aki
    }

    fn name(&self) -> &str {
        "Acute Kidney Injury"
    }

    fn guideline(&self) -> &str {
        match self {
            Aki::Demo => DEMO_GUIDELINE,
            Aki::Guideline => GUIDELINE,
        }
    }

    fn assess(&self, patient: &Patient) -> RiskResult {
        match self {
            Aki::Demo => self.assess_demo(patient),
            Aki::Guideline => self.assess_guideline(patient),
        }
    }
}
