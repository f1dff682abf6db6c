//! Display reference ranges for labs and vitals.
//!
//! These flag values for a reader's attention. They are not diagnostic and
//! no assessor reads them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wardwatch_core::{DiagnosisResult, Labs, RiskLevel, Vitals};

/// NEWS2 total at or above which the score is shown as high.
pub const NEWS2_HIGH: u32 = 5;

/// Inclusive normal interval for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValueStatus {
    Low,
    Normal,
    High,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn classify(&self, value: f64) -> ValueStatus {
        if value < self.low {
            ValueStatus::Low
        } else if value > self.high {
            ValueStatus::High
        } else {
            ValueStatus::Normal
        }
    }
}

/// A measurement outside its reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AbnormalValue {
    pub field: String,
    pub value: f64,
    pub status: ValueStatus,
    pub range: ReferenceRange,
}

pub type Field<T> = fn(&T) -> Option<f64>;

pub const LAB_RANGES: &[(&str, ReferenceRange, Field<Labs>)] = &[
    ("currentCreatinine", ReferenceRange::new(40.0, 110.0), |l| l.current_creatinine),
    // No upper bound for eGFR.
    ("currentEgfr", ReferenceRange::new(60.0, 999.0), |l| l.current_egfr),
    ("wbc", ReferenceRange::new(4.0, 11.0), |l| l.wbc),
    ("crp", ReferenceRange::new(0.0, 5.0), |l| l.crp),
    ("potassium", ReferenceRange::new(3.5, 5.3), |l| l.potassium),
    ("hb", ReferenceRange::new(120.0, 160.0), |l| l.hb),
];

pub const VITAL_RANGES: &[(&str, ReferenceRange, Field<Vitals>)] = &[
    ("temp", ReferenceRange::new(36.0, 37.9), |v| v.temp),
    ("rr", ReferenceRange::new(12.0, 20.0), |v| v.rr),
    ("hr", ReferenceRange::new(50.0, 100.0), |v| v.hr),
    ("systolicBp", ReferenceRange::new(100.0, 160.0), |v| v.systolic_bp),
    ("diastolicBp", ReferenceRange::new(60.0, 100.0), |v| v.diastolic_bp),
    ("spo2", ReferenceRange::new(94.0, 100.0), |v| v.spo2),
];

fn abnormal<T>(record: &T, table: &[(&str, ReferenceRange, Field<T>)]) -> Vec<AbnormalValue> {
    table
        .iter()
        .filter_map(|(field, range, read)| {
            let value = read(record)?;
            let status = range.classify(value);
            (status != ValueStatus::Normal).then(|| AbnormalValue {
                field: field.to_string(),
                value,
                status,
                range: *range,
            })
        })
        .collect()
}

pub fn abnormal_labs(labs: &Labs) -> Vec<AbnormalValue> {
    abnormal(labs, LAB_RANGES)
}

pub fn abnormal_vitals(vitals: &Vitals) -> Vec<AbnormalValue> {
    abnormal(vitals, VITAL_RANGES)
}

pub fn has_abnormal_labs(labs: Option<&Labs>) -> bool {
    labs.is_some_and(|l| !abnormal_labs(l).is_empty())
}

/// Out-of-range observations, or a charted NEWS2 at or above
/// [`NEWS2_HIGH`].
pub fn has_abnormal_vitals(vitals: Option<&Vitals>) -> bool {
    vitals.is_some_and(|v| {
        !abnormal_vitals(v).is_empty() || v.news2.is_some_and(|score| score >= NEWS2_HIGH)
    })
}

pub fn has_high_risk_diagnosis(diagnoses: &[DiagnosisResult]) -> bool {
    diagnoses.iter().any(|d| d.level == RiskLevel::High)
}
