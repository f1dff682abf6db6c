use thiserror::Error;

use wardwatch_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown patient: {0}")]
    UnknownPatient(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
