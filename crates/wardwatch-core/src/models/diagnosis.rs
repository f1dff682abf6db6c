use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::{RiskLevel, Trigger};

/// How much of the decisive evidence for a diagnosis was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl Confidence {
    /// High when the assessor's decisive lab or imaging input is present.
    pub fn from_decisive(present: bool) -> Self {
        if present {
            Confidence::High
        } else {
            Confidence::Moderate
        }
    }
}

/// Output of one diagnosis assessor. Only produced when the assessor had
/// something to assess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisResult {
    pub condition: String,
    pub guideline: String,
    /// Normalized, clamped to `[0, 1]`.
    pub score: f64,
    pub confidence: Confidence,
    /// Always `RiskLevel::from_score(score)`.
    pub level: RiskLevel,
    pub factors: Vec<String>,
    pub triggers: Vec<Trigger>,

    /// Level implied by the instrument's own cut-offs (CURB-65).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub clinical_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub wells_score: Option<f64>,
    #[serde(default, rename = "curb65Score", skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub curb65_score: Option<u32>,
    /// DKA only: glucose, ketone and pH thresholds all met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub criteria_met: Option<bool>,
}
