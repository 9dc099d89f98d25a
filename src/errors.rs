use dues_config::ConfigError;
use dues_core::CoreError;
use thiserror::Error;

/// Failures surfaced by the report binary.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(String),
}
