use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::exam::ExamFindings;
use super::labs::Labs;
use super::lenient::{null_as_default, percent, whole_number};
use super::vitals::Vitals;

/// A patient record as supplied to the engine.
///
/// Every field is optional or defaulted, so `{}` is a valid record. The
/// engine never mutates a `Patient`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub presenting_complaint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub vitals: Option<Vitals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub labs: Option<Labs>,
    #[serde(default, deserialize_with = "findings_or_tags")]
    pub exam_findings: ExamFindings,

    #[serde(default, alias = "pmh", deserialize_with = "null_as_default")]
    pub past_medical_history: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allergies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub mobility: Option<Mobility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub cognitive: Option<Cognitive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub continence: Option<Continence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub skin_condition: Option<SkinCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bmi: Option<f64>,
    #[serde(
        default,
        deserialize_with = "weight_loss_band",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub weight_loss: Option<WeightLoss>,
    /// Acutely ill with no nutritional intake for more than five days.
    #[serde(default, deserialize_with = "null_as_default")]
    pub acute_disease: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Mobility {
    Independent,
    #[serde(rename = "uses aid")]
    UsesAid,
    Reduced,
    ChairBound,
    Bedbound,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Cognitive {
    Intact,
    Impaired,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Continence {
    Continent,
    Incontinent,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkinCondition {
    Intact,
    Fragile,
    Broken,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Nutrition {
    Adequate,
    Poor,
    #[serde(other)]
    Other,
}

/// Unplanned weight loss over the past 3–6 months, as a MUST band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WeightLoss {
    #[serde(rename = "<5%")]
    UnderFive,
    #[serde(rename = "5-10%")]
    FiveToTen,
    #[serde(rename = ">10%")]
    OverTen,
    #[serde(other)]
    Other,
}

impl WeightLoss {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 10.0 {
            WeightLoss::OverTen
        } else if percent >= 5.0 {
            WeightLoss::FiveToTen
        } else {
            WeightLoss::UnderFive
        }
    }
}

impl Patient {
    /// Read one lab value, `None` when there is no panel or no result.
    pub fn lab(&self, field: impl Fn(&Labs) -> Option<f64>) -> Option<f64> {
        self.labs.as_ref().and_then(field)
    }

    /// Read one vital sign, `None` when there are no observations.
    pub fn vital(&self, field: impl Fn(&Vitals) -> Option<f64>) -> Option<f64> {
        self.vitals.as_ref().and_then(field)
    }

    pub fn age_at_least(&self, years: u32) -> bool {
        self.age.is_some_and(|age| age >= years)
    }

    pub fn age_over(&self, years: u32) -> bool {
        self.age.is_some_and(|age| age > years)
    }

    /// Exact (case-insensitive) match against a history tag.
    pub fn has_history(&self, tag: &str) -> bool {
        self.past_medical_history
            .iter()
            .any(|h| h.trim().eq_ignore_ascii_case(tag))
    }

    pub fn has_any_history(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_history(tag))
    }

    /// Whole-word match inside any history tag, so "pe" finds "previous pe"
    /// but not "hypertension".
    pub fn history_mentions_word(&self, word: &str) -> bool {
        self.past_medical_history.iter().any(|h| {
            h.split(|c: char| !c.is_alphanumeric())
                .any(|w| w.eq_ignore_ascii_case(word))
        })
    }

    /// Case-insensitive substring search across all medication names.
    pub fn takes_any(&self, keywords: &[&str]) -> bool {
        let meds = self.medications.join(" ").to_lowercase();
        keywords.iter().any(|k| meds.contains(k))
    }

    /// Case-insensitive substring search in the presenting complaint.
    pub fn complaint_mentions_any(&self, keywords: &[&str]) -> bool {
        let pc = self.presenting_complaint.to_lowercase();
        keywords.iter().any(|k| pc.contains(k))
    }

    pub fn has_impaired_cognition(&self) -> bool {
        self.cognitive == Some(Cognitive::Impaired)
    }
}

/// Accepts a band label or a raw percentage. Unrecognised labels become
/// [`WeightLoss::Other`].
fn weight_loss_band<'de, D>(deserializer: D) -> Result<Option<WeightLoss>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => None,
        Some(value) => Some(match percent(&value) {
            Some(loss) => WeightLoss::from_percent(loss),
            None => WeightLoss::deserialize(value).unwrap_or(WeightLoss::Other),
        }),
    })
}

/// Older records list exam findings as bare strings; newer ones use the
/// structured form. Bare strings become `notes`.
fn findings_or_tags<'de, D>(deserializer: D) -> Result<ExamFindings, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Input {
        Tags(Vec<String>),
        Structured(ExamFindings),
    }

    Ok(match Option::<Input>::deserialize(deserializer)? {
        Some(Input::Tags(notes)) => ExamFindings {
            notes,
            ..ExamFindings::default()
        },
        Some(Input::Structured(findings)) => findings,
        None => ExamFindings::default(),
    })
}
