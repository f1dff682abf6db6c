use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A laboratory panel. Every analyte is optional: a missing value means
/// "not yet resulted", never zero.
///
/// Units are those the record arrives in. No conversion is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Labs {
    /// µmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub current_creatinine: Option<f64>,
    /// µmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub baseline_creatinine: Option<f64>,
    /// mL/min/1.73m²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub current_egfr: Option<f64>,
    /// mL/min/1.73m²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub baseline_egfr: Option<f64>,
    /// White cell count, ×10⁹/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub wbc: Option<f64>,
    /// mg/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub crp: Option<f64>,
    /// mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub potassium: Option<f64>,
    /// mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sodium: Option<f64>,
    /// mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub urea: Option<f64>,
    /// High-sensitivity troponin, ng/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub troponin: Option<f64>,
    /// pg/mL
    #[serde(default, rename = "ntProBNP", skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub nt_pro_bnp: Option<f64>,
    /// ng/mL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub d_dimer: Option<f64>,
    /// mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub glucose: Option<f64>,
    /// Blood ketones, mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ketones: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ph: Option<f64>,
    /// mmol/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bicarbonate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub inr: Option<f64>,
    /// Haemoglobin, g/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hb: Option<f64>,
}
