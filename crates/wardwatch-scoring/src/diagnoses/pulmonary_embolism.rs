use wardwatch_core::{Confidence, DiagnosisResult, Patient};

use crate::scoring::{Check, Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Pulmonary embolism: Wells criteria, then D-dimer.
pub struct PulmonaryEmbolism;

const CONDITION: &str = "Pulmonary Embolism";
const GUIDELINE: &str = "NICE NG158 - Venous thromboembolic diseases";

/// Wells above this makes PE likely.
const WELLS_LIKELY: f64 = 4.0;
/// D-dimer (ng/mL) above this is elevated.
const D_DIMER_UPPER: f64 = 500.0;

static WELLS: &[Step] = &[
    Step::Rule(Rule {
        code: "haemoptysis",
        points: 1.0,
        text: "Haemoptysis (+1 Wells)",
        check: |p| {
            (p.complaint_mentions_any(&["haemoptysis"])
                || (p.complaint_mentions_any(&["blood"]) && p.complaint_mentions_any(&["cough"]))
                || p.exam_findings.has_haemoptysis())
            .into()
        },
    }),
    Step::Rule(Rule {
        code: "dvt_signs",
        points: 3.0,
        text: "Clinical signs of DVT (+3 Wells)",
        check: |p| {
            (p.complaint_mentions_any(&["dvt", "leg swelling"]) || p.exam_findings.has_dvt_signs())
                .into()
        },
    }),
    Step::Rule(Rule {
        code: "previous_vte",
        points: 1.5,
        text: "Previous PE or DVT (+1.5 Wells)",
        check: |p| {
            ["pe", "dvt", "vte"]
                .iter()
                .any(|word| p.history_mentions_word(word))
                .into()
        },
    }),
    Step::Rule(Rule {
        code: "tachycardia",
        points: 1.5,
        text: "Heart rate >100 bpm ({}) (+1.5 Wells)",
        check: |p| Check::value(p.vital(|v| v.hr), |hr| hr > 100.0),
    }),
    Step::Rule(Rule {
        code: "recent_surgery_or_immobilisation",
        points: 1.5,
        text: "Recent surgery/immobilisation (+1.5 Wells)",
        check: |p| {
            (p.complaint_mentions_any(&["post-op", "immobile"])
                || p.exam_findings.recent_surgery
                || p.exam_findings.has_immobilisation())
            .into()
        },
    }),
];

impl DiagnosisAssessor for PulmonaryEmbolism {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let mut tally = Tally::new();
        tally.apply(WELLS, patient);

        // A D-dimer with no Wells items is still worth interpreting.
        let d_dimer = patient.lab(|l| l.d_dimer);
        if tally.is_empty() && d_dimer.is_none() {
            return None;
        }

        let wells = tally.raw();
        tally.set_score(0.0);
        tally.note("wells_score", Some(wells), format!("Wells score: {wells:.1}"));

        if let Some(d_dimer) = d_dimer {
            if d_dimer > D_DIMER_UPPER {
                tally.add_observed(
                    0.3,
                    "d_dimer_elevated",
                    d_dimer,
                    format!("D-dimer elevated ({d_dimer} ng/mL)"),
                );
            } else {
                tally.note(
                    "d_dimer_normal",
                    Some(d_dimer),
                    format!("D-dimer normal ({d_dimer} ng/mL) - PE unlikely if Wells ≤4"),
                );
            }
        }

        if wells > WELLS_LIKELY {
            tally.add(0.6, "wells_likely", "Wells score >4 - PE likely, CTPA indicated");
        } else {
            tally.add(0.2, "wells_unlikely", "Wells score ≤4 - PE unlikely");
        }

        Some(DiagnosisResult {
            wells_score: Some(wells),
            ..tally.into_diagnosis(
                CONDITION,
                GUIDELINE,
                Confidence::from_decisive(d_dimer.is_some()),
            )
        })
    }
}
