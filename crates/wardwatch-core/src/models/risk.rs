use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::mode::Mode;
use crate::error::CoreError;

/// Qualitative severity band shared by every assessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const MODERATE_THRESHOLD: f64 = 0.4;
    pub const HIGH_THRESHOLD: f64 = 0.7;

    /// Band a normalized score: `<0.4` low, `[0.4, 0.7)` moderate, `≥0.7` high.
    ///
    /// This is the only place the generic thresholds live.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= Self::MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Band an integer-style raw score against its own clinical cut-offs.
    pub fn from_cutoffs(raw: f64, moderate_at: f64, high_at: f64) -> Self {
        if raw >= high_at {
            RiskLevel::High
        } else if raw >= moderate_at {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a score into `[0, 1]`. NaN collapses to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// The machine-checkable form of one factor: which rule fired and, where
/// the rule compared a measurement, the value observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Trigger {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub value: Option<f64>,
}

/// The deterioration risks the engine assesses, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Condition {
    Aki,
    Sepsis,
    Vte,
    Delirium,
    Falls,
    PressureUlcer,
    RespiratoryFailure,
    CardiacArrest,
    Electrolyte,
    MedicationHarm,
    Malnutrition,
    Bleeding,
}

impl Condition {
    pub const ALL: [Condition; 12] = [
        Condition::Aki,
        Condition::Sepsis,
        Condition::Vte,
        Condition::Delirium,
        Condition::Falls,
        Condition::PressureUlcer,
        Condition::RespiratoryFailure,
        Condition::CardiacArrest,
        Condition::Electrolyte,
        Condition::MedicationHarm,
        Condition::Malnutrition,
        Condition::Bleeding,
    ];

    /// Wire name, as used for map keys.
    pub fn key(&self) -> &'static str {
        match self {
            Condition::Aki => "aki",
            Condition::Sepsis => "sepsis",
            Condition::Vte => "vte",
            Condition::Delirium => "delirium",
            Condition::Falls => "falls",
            Condition::PressureUlcer => "pressureUlcer",
            Condition::RespiratoryFailure => "respiratoryFailure",
            Condition::CardiacArrest => "cardiacArrest",
            Condition::Electrolyte => "electrolyte",
            Condition::MedicationHarm => "medicationHarm",
            Condition::Malnutrition => "malnutrition",
            Condition::Bleeding => "bleeding",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}

/// Output of one risk assessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskResult {
    pub mode: Mode,
    /// Citation for the rules applied.
    pub guideline: String,
    /// Normalized, clamped to `[0, 1]`.
    pub score: f64,
    /// Always `RiskLevel::from_score(score)`.
    pub level: RiskLevel,
    pub factors: Vec<String>,
    /// One per factor, same order.
    pub triggers: Vec<Trigger>,

    /// Level implied by the raw score's own clinical cut-offs, where the
    /// instrument defines them. Kept separate from `level`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub clinical_level: Option<RiskLevel>,
    /// AKI stage (0–3), guideline mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub stage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub padua_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub must_score: Option<f64>,
    #[serde(default, rename = "hasbledScore", skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hasbled_score: Option<u32>,
}

impl RiskResult {
    /// A well-formed result with nothing to report.
    pub fn empty(mode: Mode, guideline: impl Into<String>) -> Self {
        RiskResult {
            mode,
            guideline: guideline.into(),
            score: 0.0,
            level: RiskLevel::Low,
            factors: Vec::new(),
            triggers: Vec::new(),
            clinical_level: None,
            stage: None,
            padua_score: None,
            must_score: None,
            hasbled_score: None,
        }
    }
}
