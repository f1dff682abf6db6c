//! wardwatch-core
//!
//! Pure domain types for the Wardwatch scoring engine. No scoring logic
//! lives here; this is the shared vocabulary between the engine, the CLI,
//! and the TypeScript bindings consumed by the UI.

pub mod error;
pub mod models;
pub mod roster;

pub use models::diagnosis::{Confidence, DiagnosisResult};
pub use models::exam::ExamFindings;
pub use models::labs::Labs;
pub use models::mode::Mode;
pub use models::patient::{
    Cognitive, Continence, Mobility, Nutrition, Patient, SkinCondition, WeightLoss,
};
pub use models::risk::{clamp_score, Condition, RiskLevel, RiskResult, Trigger};
pub use models::vitals::{Avpu, Vitals};
