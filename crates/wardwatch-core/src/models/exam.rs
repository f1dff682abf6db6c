use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lenient::null_as_default;

/// Examination and investigation findings.
///
/// Structured reports (ECG, imaging, echo) are free text or a single value.
/// Bedside signs are flags; the same signs are also recognised when they
/// appear as free-text `notes` tags such as `"recent surgery"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExamFindings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ecg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ct_head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub chest_xray: Option<String>,
    /// Left ventricular ejection fraction, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub lvef: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub confusion: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facial_weakness: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub limb_weakness: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speech_difficulty: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub haemoptysis: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dvt_signs: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_trauma: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_surgery: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub immobilised: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
}

impl ExamFindings {
    /// Whether any note contains `needle` (case-insensitive).
    pub fn noted(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.notes
            .iter()
            .any(|note| note.to_lowercase().contains(&needle))
    }

    pub fn has_confusion(&self) -> bool {
        self.confusion || self.noted("confusion") || self.noted("confused")
    }

    pub fn has_facial_weakness(&self) -> bool {
        self.facial_weakness || self.noted("facial droop") || self.noted("facial weakness")
    }

    pub fn has_limb_weakness(&self) -> bool {
        self.limb_weakness || self.noted("arm weakness") || self.noted("limb weakness")
    }

    pub fn has_speech_difficulty(&self) -> bool {
        self.speech_difficulty || self.noted("speech") || self.noted("slurred")
    }

    pub fn has_haemoptysis(&self) -> bool {
        self.haemoptysis || self.noted("haemoptysis") || self.noted("hemoptysis")
    }

    pub fn has_dvt_signs(&self) -> bool {
        self.dvt_signs || self.noted("leg swelling") || self.noted("calf swelling")
    }

    pub fn has_recent_trauma_or_surgery(&self) -> bool {
        self.recent_trauma
            || self.recent_surgery
            || self.noted("recent trauma")
            || self.noted("recent surgery")
    }

    pub fn has_immobilisation(&self) -> bool {
        self.immobilised || self.noted("immobil")
    }
}
