//! Everything the engine says about one patient, in one bundle.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wardwatch_core::roster::find_patient;
use wardwatch_core::{DiagnosisResult, Mode, Patient};

use crate::aggregate::{compute_diagnoses, compute_risks, RiskReport};
use crate::error::ScoringError;
use crate::news2::{compute_news2, validate_vitals, News2Result};
use crate::ranges::{
    abnormal_labs, abnormal_vitals, has_abnormal_labs, has_abnormal_vitals, has_high_risk_diagnosis,
    AbnormalValue,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientAssessment {
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub patient_id: Option<String>,
    /// Absent when no observations were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub news2: Option<News2Result>,
    pub risks: RiskReport,
    pub diagnoses: Vec<DiagnosisResult>,
    /// Lab and vital values outside their reference ranges.
    pub abnormal_values: Vec<AbnormalValue>,
    pub flags: ReviewFlags,
    /// Plausibility warnings on the observations. Informational only.
    pub warnings: Vec<String>,
}

/// Roster-level markers for patients who need a closer look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewFlags {
    pub abnormal_labs: bool,
    /// Out-of-range observations or a charted NEWS2 of 5 or more.
    pub abnormal_vitals: bool,
    pub high_risk_diagnosis: bool,
}

pub fn assess_patient(patient: &Patient, mode: Mode) -> PatientAssessment {
    let patient_id = patient.id.as_deref().unwrap_or("-");

    let check = validate_vitals(patient.vitals.as_ref());
    if !check.warnings.is_empty() {
        tracing::warn!(patient_id, warnings = ?check.warnings, "vital signs check");
    }

    let news2 = patient.vitals.as_ref().map(compute_news2);
    let risks = compute_risks(patient, mode);
    let diagnoses = compute_diagnoses(patient);

    let lab_values = patient.labs.as_ref().map(abnormal_labs).unwrap_or_default();
    let vital_values = patient.vitals.as_ref().map(abnormal_vitals).unwrap_or_default();
    let flags = ReviewFlags {
        abnormal_labs: has_abnormal_labs(patient.labs.as_ref()),
        abnormal_vitals: has_abnormal_vitals(patient.vitals.as_ref()),
        high_risk_diagnosis: has_high_risk_diagnosis(&diagnoses),
    };

    tracing::info!(
        patient_id,
        %mode,
        overall_level = %risks.overall.level,
        diagnoses = diagnoses.len(),
        abnormal_values = lab_values.len() + vital_values.len(),
        "patient assessed"
    );

    PatientAssessment {
        mode,
        patient_id: patient.id.clone(),
        news2,
        risks,
        diagnoses,
        abnormal_values: lab_values.into_iter().chain(vital_values).collect(),
        flags,
        warnings: check.warnings,
    }
}

/// Look a patient up by id and assess them. `mode` is parsed here so an
/// unsupported value is rejected before any scoring runs.
pub fn assess_by_id(
    patients: &[Patient],
    id: &str,
    mode: &str,
) -> Result<PatientAssessment, ScoringError> {
    let mode = Mode::from_str(mode)?;
    let patient =
        find_patient(patients, id).ok_or_else(|| ScoringError::UnknownPatient(id.to_string()))?;
    Ok(assess_patient(patient, mode))
}
