//! Runs every assessor over one patient and packages the results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wardwatch_core::{Condition, DiagnosisResult, Mode, Patient, RiskLevel, RiskResult};

use crate::{diagnosis_assessors, risk_assessors};

/// Worst single risk across all conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Overall {
    pub score: f64,
    pub level: RiskLevel,
}

impl Overall {
    /// `max` over the scores. No weighting, no combination.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a RiskResult>) -> Self {
        let score = results
            .into_iter()
            .map(|r| r.score)
            .fold(0.0_f64, f64::max);
        Overall {
            score,
            level: RiskLevel::from_score(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskReport {
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub patient_id: Option<String>,
    /// One entry per condition, in declaration order.
    pub risks: BTreeMap<Condition, RiskResult>,
    pub overall: Overall,
}

impl RiskReport {
    pub fn get(&self, condition: Condition) -> Option<&RiskResult> {
        self.risks.get(&condition)
    }
}

/// Score all twelve risks. AKI and sepsis follow `mode`.
pub fn compute_risks(patient: &Patient, mode: Mode) -> RiskReport {
    let risks: BTreeMap<Condition, RiskResult> = risk_assessors(mode)
        .into_iter()
        .map(|assessor| (assessor.condition(), assessor.assess(patient)))
        .collect();
    let overall = Overall::from_results(risks.values());

    tracing::debug!(
        patient_id = patient.id.as_deref().unwrap_or("-"),
        %mode,
        overall_score = overall.score,
        "risks computed"
    );

    RiskReport {
        mode,
        patient_id: patient.id.clone(),
        risks,
        overall,
    }
}

/// Run the diagnosis assessors, keeping only those that had something to
/// assess, in evaluation order.
pub fn compute_diagnoses(patient: &Patient) -> Vec<DiagnosisResult> {
    diagnosis_assessors()
        .iter()
        .filter_map(|assessor| assessor.assess(patient))
        .collect()
}
