//! Patient list projections for the collaborator that owns the records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::patient::Patient;

/// The identifying subset of a patient, as shown in a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientSummary {
    #[ts(optional)]
    pub id: Option<String>,
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub age: Option<u32>,
    #[ts(optional)]
    pub sex: Option<String>,
    pub presenting_complaint: String,
}

impl From<&Patient> for PatientSummary {
    fn from(p: &Patient) -> Self {
        PatientSummary {
            id: p.id.clone(),
            name: p.name.clone(),
            age: p.age,
            sex: p.sex.clone(),
            presenting_complaint: p.presenting_complaint.clone(),
        }
    }
}

/// Summaries of the patients whose name or presenting complaint contains
/// `query` (case-insensitive). A blank query matches everyone.
pub fn search_patients(patients: &[Patient], query: &str) -> Vec<PatientSummary> {
    let term = query.trim().to_lowercase();
    patients
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
                || p.presenting_complaint.to_lowercase().contains(&term)
        })
        .map(PatientSummary::from)
        .collect()
}

/// Find a patient by exact id.
pub fn find_patient<'a>(patients: &'a [Patient], id: &str) -> Option<&'a Patient> {
    patients.iter().find(|p| p.id.as_deref() == Some(id))
}

/// Parse a records file: a JSON array of patients.
pub fn parse_records(json: &str) -> Result<Vec<Patient>, CoreError> {
    Ok(serde_json::from_str(json)?)
}
