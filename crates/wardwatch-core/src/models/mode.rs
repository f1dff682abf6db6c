use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which rule set the engine applies where a condition has more than one.
///
/// Only AKI and sepsis have a demo variant; every other assessor is
/// guideline-based regardless of mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mode {
    /// Simplified heuristic rules, not tied to a published guideline.
    Demo,
    /// Rules citing formal clinical criteria.
    #[default]
    Guideline,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Demo => "demo",
            Mode::Guideline => "guideline",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demo" => Ok(Mode::Demo),
            "guideline" => Ok(Mode::Guideline),
            other => Err(CoreError::UnsupportedMode(other.to_string())),
        }
    }
}
