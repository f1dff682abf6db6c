use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported mode '{0}': expected \"demo\" or \"guideline\"")]
    UnsupportedMode(String),

    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}
