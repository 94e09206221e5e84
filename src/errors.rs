use thiserror::Error;

/// Error type that captures common registry and configuration failures.
#[derive(Debug, Error)]
pub enum MastersError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Missing configuration value `{key}` for module `{module}`")]
    MissingConfig { module: String, key: String },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
