use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lenient::{null_as_default, whole_number};

/// Level of consciousness on the ACVPU scale.
///
/// Records in the wild use either the full word or the initial letter, so
/// both spellings deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Avpu {
    #[serde(alias = "A", alias = "alert")]
    Alert,
    /// New-onset confusion (the "C" added by NEWS2).
    #[serde(alias = "C", alias = "confusion", alias = "Confused")]
    Confusion,
    #[serde(alias = "V", alias = "voice")]
    Voice,
    #[serde(alias = "P", alias = "pain")]
    Pain,
    #[serde(alias = "U", alias = "unresponsive")]
    Unresponsive,
    /// Anything else charted. Treated as not alert.
    #[serde(other)]
    Unrecognised,
}

impl Avpu {
    pub fn is_alert(&self) -> bool {
        matches!(self, Avpu::Alert)
    }
}

/// A set of bedside observations. Any subset may be recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Vitals {
    /// Respiratory rate, breaths/min.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rr: Option<f64>,
    /// Oxygen saturation, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub spo2: Option<f64>,
    /// Temperature, °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub systolic_bp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub diastolic_bp: Option<f64>,
    /// Heart rate, beats/min.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avpu: Option<Avpu>,
    #[serde(default, rename = "supplementalO2", deserialize_with = "null_as_default")]
    pub supplemental_o2: bool,
    /// NEWS2 total as charted, if the record carries one.
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub news2: Option<u32>,
    /// Legacy early warning score, used when no NEWS2 was charted.
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub ews: Option<u32>,
}

impl Vitals {
    /// The charted early warning score: NEWS2 if present, else EWS.
    pub fn charted_score(&self) -> Option<u32> {
        self.news2.or(self.ews)
    }

    /// Consciousness is treated as "Alert" when not recorded.
    pub fn is_alert(&self) -> bool {
        self.avpu.is_none_or(|avpu| avpu.is_alert())
    }
}
