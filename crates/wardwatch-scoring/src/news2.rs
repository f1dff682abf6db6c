//! NEWS2 (National Early Warning Score 2), Royal College of Physicians.
//!
//! Each physiological parameter maps to a sub-score through its own
//! threshold table. Missing observations score 0; consciousness defaults to
//! Alert.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wardwatch_core::{Avpu, Vitals};

/// Points added for any supplemental oxygen.
pub const SUPPLEMENTAL_OXYGEN_SCORE: u32 = 2;

/// Points for any consciousness level other than Alert.
const ALTERED_CONSCIOUSNESS_SCORE: u32 = 3;

/// A scored vital sign with a numeric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum News2Parameter {
    RespirationRate,
    OxygenSaturation,
    Temperature,
    SystolicBp,
    HeartRate,
}

/// Piecewise table: the first step whose inclusive upper bound covers the
/// value gives the sub-score, else `above`.
struct Table {
    steps: &'static [(f64, u32)],
    above: u32,
}

impl Table {
    fn score(&self, value: f64) -> u32 {
        self.steps
            .iter()
            .find(|(upper, _)| value <= *upper)
            .map(|(_, points)| *points)
            .unwrap_or(self.above)
    }
}

const RESPIRATION_RATE: Table = Table {
    steps: &[(8.0, 3), (11.0, 1), (20.0, 0), (24.0, 2)],
    above: 3,
};

const OXYGEN_SATURATION: Table = Table {
    steps: &[(91.0, 3), (93.0, 2), (95.0, 1)],
    above: 0,
};

const TEMPERATURE: Table = Table {
    steps: &[(35.0, 3), (36.0, 1), (38.0, 0), (39.0, 1)],
    above: 2,
};

const SYSTOLIC_BP: Table = Table {
    steps: &[(90.0, 3), (100.0, 2), (110.0, 1), (219.0, 0)],
    above: 3,
};

const HEART_RATE: Table = Table {
    steps: &[(40.0, 3), (50.0, 1), (90.0, 0), (110.0, 1), (130.0, 2)],
    above: 3,
};

/// Sub-score for a single numeric parameter.
pub fn parameter_score(parameter: News2Parameter, value: f64) -> u32 {
    let table = match parameter {
        News2Parameter::RespirationRate => &RESPIRATION_RATE,
        News2Parameter::OxygenSaturation => &OXYGEN_SATURATION,
        News2Parameter::Temperature => &TEMPERATURE,
        News2Parameter::SystolicBp => &SYSTOLIC_BP,
        News2Parameter::HeartRate => &HEART_RATE,
    };
    table.score(value)
}

/// 0 if Alert or unrecorded, else 3.
pub fn consciousness_score(avpu: Option<Avpu>) -> u32 {
    match avpu {
        None | Some(Avpu::Alert) => 0,
        Some(_) => ALTERED_CONSCIOUSNESS_SCORE,
    }
}

/// NEWS2 response band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum News2Band {
    Low,
    LowMedium,
    Medium,
    High,
}

impl News2Band {
    /// `≥7` high, `5–6` medium, `3–4` low-medium, `<3` low.
    pub fn from_total(total: u32) -> Self {
        match total {
            7.. => News2Band::High,
            5..=6 => News2Band::Medium,
            3..=4 => News2Band::LowMedium,
            _ => News2Band::Low,
        }
    }

    pub fn clinical_response(&self) -> &'static str {
        match self {
            News2Band::High => {
                "Emergency assessment by critical care team. Consider transfer to higher level care."
            }
            News2Band::Medium => {
                "Urgent review by ward-based doctor or acute team nurse. Consider critical care referral."
            }
            News2Band::LowMedium => {
                "Increase frequency of observations. Inform registered nurse who must assess patient."
            }
            News2Band::Low => "Continue routine NEWS monitoring.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct News2Breakdown {
    pub respiration_rate: u32,
    pub oxygen_saturation: u32,
    pub temperature: u32,
    pub systolic_bp: u32,
    pub heart_rate: u32,
    pub consciousness: u32,
}

impl News2Breakdown {
    pub fn sum(&self) -> u32 {
        self.respiration_rate
            + self.oxygen_saturation
            + self.temperature
            + self.systolic_bp
            + self.heart_rate
            + self.consciousness
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct News2Result {
    pub total_score: u32,
    pub individual_scores: News2Breakdown,
    pub oxygen_score: u32,
    pub risk_level: News2Band,
    pub clinical_response: String,
}

/// Score a set of observations.
pub fn compute_news2(vitals: &Vitals) -> News2Result {
    let score = |parameter, value: Option<f64>| {
        value.map_or(0, |v| parameter_score(parameter, v))
    };

    let individual_scores = News2Breakdown {
        respiration_rate: score(News2Parameter::RespirationRate, vitals.rr),
        oxygen_saturation: score(News2Parameter::OxygenSaturation, vitals.spo2),
        temperature: score(News2Parameter::Temperature, vitals.temp),
        systolic_bp: score(News2Parameter::SystolicBp, vitals.systolic_bp),
        heart_rate: score(News2Parameter::HeartRate, vitals.hr),
        consciousness: consciousness_score(vitals.avpu),
    };
    let oxygen_score = if vitals.supplemental_o2 {
        SUPPLEMENTAL_OXYGEN_SCORE
    } else {
        0
    };

    let total_score = individual_scores.sum() + oxygen_score;
    let risk_level = News2Band::from_total(total_score);

    News2Result {
        total_score,
        individual_scores,
        oxygen_score,
        risk_level,
        clinical_response: risk_level.clinical_response().to_string(),
    }
}

/// The early warning score assessors act on: the charted NEWS2 (or legacy
/// EWS) when the record has one, otherwise computed from the observations.
pub fn effective_news2(vitals: &Vitals) -> u32 {
    vitals
        .charted_score()
        .unwrap_or_else(|| compute_news2(vitals).total_score)
}

/// Result of a plausibility check on observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsCheck {
    pub valid: bool,
    pub warnings: Vec<String>,
}

/// Plausible physiological bounds, inclusive.
const PLAUSIBLE: [(&str, fn(&Vitals) -> Option<f64>, f64, f64); 5] = [
    ("Respiratory rate", |v| v.rr, 5.0, 60.0),
    ("Heart rate", |v| v.hr, 20.0, 250.0),
    ("Temperature", |v| v.temp, 30.0, 43.0),
    ("Systolic BP", |v| v.systolic_bp, 40.0, 250.0),
    ("Oxygen saturation", |v| v.spo2, 50.0, 100.0),
];

/// Flag observations outside plausible bounds. Never rejects: scoring
/// proceeds on whatever was recorded.
pub fn validate_vitals(vitals: Option<&Vitals>) -> VitalsCheck {
    let Some(vitals) = vitals else {
        return VitalsCheck {
            valid: false,
            warnings: vec!["No vital signs data provided".to_string()],
        };
    };

    let warnings: Vec<String> = PLAUSIBLE
        .iter()
        .filter_map(|(label, field, min, max)| {
            field(vitals)
                .filter(|v| *v < *min || *v > *max)
                .map(|v| format!("{label} ({v}) is clinically unlikely"))
        })
        .collect();

    VitalsCheck {
        valid: warnings.is_empty(),
        warnings,
    }
}
