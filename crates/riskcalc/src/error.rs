use thiserror::Error;

/// Errors from ledger mutations and event-file loading
#[derive(Error, Debug)]
pub enum RiskError {
    #[error("index {index} out of bounds for {len} events")]
    InvalidArgument { index: usize, len: usize },

    #[error("failed to read event file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
