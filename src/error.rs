use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid champion data: {0}")]
    InvalidData(String),

    #[error("Champion not found in catalog: {0}")]
    UnknownChampion(String),

    #[error("Invalid weight configuration: {0}")]
    InvalidWeights(String),

    #[error("Invalid draft argument: {0}. Use format: role=champion-id")]
    InvalidDraftArg(String),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parsing error in {path}: {source}")]
    JsonError {
        path: String,
        source: serde_json::Error,
    },
}
