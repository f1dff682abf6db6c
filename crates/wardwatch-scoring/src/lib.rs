//! wardwatch-scoring
//!
//! Rule-based deterioration-risk and diagnosis scoring. Pure functions of a
//! `Patient` record: no I/O, no shared state. Every assessor can run in any
//! order, on any thread, with the same result.

pub mod aggregate;
pub mod assessment;
pub mod diagnoses;
pub mod error;
pub mod news2;
pub mod ranges;
pub mod risks;
pub mod scoring;

pub use aggregate::{compute_diagnoses, compute_risks, Overall, RiskReport};
pub use assessment::{assess_by_id, assess_patient, PatientAssessment, ReviewFlags};
pub use error::ScoringError;
pub use news2::{compute_news2, validate_vitals, News2Result, VitalsCheck};

use wardwatch_core::{Condition, DiagnosisResult, Mode, Patient, RiskResult};

/// A deterioration-risk assessor.
///
/// Assessors never fail: a missing input contributes nothing, and an
/// assessor with no usable inputs returns a zero-score result.
pub trait RiskAssessor: Send + Sync {
    fn condition(&self) -> Condition;

    /// Human-readable name (e.g., "Acute Kidney Injury").
    fn name(&self) -> &str;

    /// Citation for the rules applied.
    fn guideline(&self) -> &str;

    fn assess(&self, patient: &Patient) -> RiskResult;
}

/// A differential-diagnosis assessor.
pub trait DiagnosisAssessor: Send + Sync {
    /// Condition name as reported (e.g., "Pulmonary Embolism").
    fn condition(&self) -> &str;

    fn guideline(&self) -> &str;

    /// `None` when the record holds nothing this assessor can use, which
    /// means "not assessable", not "assessed as negative".
    fn assess(&self, patient: &Patient) -> Option<DiagnosisResult>;
}

/// All twelve risk assessors for a mode, in report order.
pub fn risk_assessors(mode: Mode) -> Vec<Box<dyn RiskAssessor>> {
    Condition::ALL
        .into_iter()
        .map(|condition| risk_assessor(condition, mode))
        .collect()
}

/// The assessor for one condition. AKI and sepsis pick their rule set by
/// mode; the rest ignore it.
pub fn risk_assessor(condition: Condition, mode: Mode) -> Box<dyn RiskAssessor> {
    match condition {
        Condition::Aki => Box::new(risks::aki::Aki::for_mode(mode)),
        Condition::Sepsis => Box::new(risks::sepsis::Sepsis::for_mode(mode)),
        Condition::Vte => Box::new(risks::vte::Padua),
        Condition::Delirium => Box::new(risks::delirium::Delirium),
        Condition::Falls => Box::new(risks::falls::Falls),
        Condition::PressureUlcer => Box::new(risks::pressure_ulcer::PressureUlcer),
        Condition::RespiratoryFailure => {
            Box::new(risks::respiratory_failure::RespiratoryFailure)
        }
        Condition::CardiacArrest => Box::new(risks::cardiac_arrest::CardiacArrest),
        Condition::Electrolyte => Box::new(risks::electrolyte::Electrolyte),
        Condition::MedicationHarm => Box::new(risks::medication_harm::MedicationHarm),
        Condition::Malnutrition => Box::new(risks::malnutrition::Must),
        Condition::Bleeding => Box::new(risks::bleeding::HasBled),
    }
}

/// Run a single risk assessor.
pub fn assess_condition(patient: &Patient, condition: Condition, mode: Mode) -> RiskResult {
    risk_assessor(condition, mode).assess(patient)
}

/// All six diagnosis assessors, in evaluation order.
pub fn diagnosis_assessors() -> Vec<Box<dyn DiagnosisAssessor>> {
    vec![
        Box::new(diagnoses::heart_failure::HeartFailure),
        Box::new(diagnoses::pulmonary_embolism::PulmonaryEmbolism),
        Box::new(diagnoses::dka::Dka),
        Box::new(diagnoses::acs::Acs),
        Box::new(diagnoses::pneumonia::Pneumonia),
        Box::new(diagnoses::stroke::Stroke),
    ]
}
