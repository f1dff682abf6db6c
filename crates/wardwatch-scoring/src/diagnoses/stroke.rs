use wardwatch_core::{Confidence, DiagnosisResult, Patient};

use crate::scoring::{Rule, Step, Tally};
use crate::DiagnosisAssessor;

/// Stroke / TIA by FAST and CT head.
pub struct Stroke;

const CONDITION: &str = "Stroke / TIA";
const GUIDELINE: &str = "NICE NG128 - Stroke and transient ischaemic attack in over 16s";

const FAST: &[&str] = &["fast_face", "fast_arm", "fast_speech"];

fn ct_mentions(p: &Patient, keywords: &[&str]) -> bool {
    p.exam_findings
        .ct_head
        .as_deref()
        .map(str::to_lowercase)
        .is_some_and(|ct| keywords.iter().any(|k| ct.contains(k)))
}

static RULES: &[Step] = &[
    Step::Rule(Rule {
        code: "fast_face",
        points: 0.3,
        text: "Facial weakness present (F in FAST)",
        check: |p| {
            (p.complaint_mentions_any(&["facial droop", "facial weakness"])
                || p.exam_findings.has_facial_weakness())
            .into()
        },
    }),
    Step::Rule(Rule {
        code: "fast_arm",
        points: 0.3,
        text: "Arm/limb weakness present (A in FAST)",
        check: |p| {
            (p.complaint_mentions_any(&["arm weak", "limb weak"])
                || p.exam_findings.has_limb_weakness())
            .into()
        },
    }),
    Step::Rule(Rule {
        code: "fast_speech",
        points: 0.3,
        text: "Speech difficulty present (S in FAST)",
        check: |p| {
            (p.complaint_mentions_any(&["speech", "slurred"])
                || p.exam_findings.has_speech_difficulty())
            .into()
        },
    }),
    Step::FirstOf(&[
        Rule {
            code: "ct_ischaemic",
            points: 0.5,
            text: "Ischaemic stroke on CT - thrombolysis window assessment needed",
            check: |p| ct_mentions(p, &["ischaemic", "infarct"]).into(),
        },
        Rule {
            code: "ct_haemorrhagic",
            points: 0.8,
            text: "Haemorrhagic stroke on CT - urgent neurosurgical input",
            check: |p| ct_mentions(p, &["haemorrhage", "bleed"]).into(),
        },
    ]),
];

impl DiagnosisAssessor for Stroke {
    fn condition(&self) -> &str {
        CONDITION
    }

    fn guideline(&self) -> &str {
        GUIDELINE
    }

    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult> {
        let mut tally = Tally::new();
        tally.apply(RULES, patient);

        let fast_positive = FAST.iter().any(|code| tally.has(code));
        let has_ct = patient.exam_findings.ct_head.is_some();
        if !fast_positive && !has_ct {
            return None;
        }

        if fast_positive {
            tally.note(
                "fast_positive",
                None,
                "FAST positive - urgent imaging required",
            );
        }

        Some(tally.into_diagnosis(CONDITION, GUIDELINE, Confidence::from_decisive(has_ct)))
    }
}
