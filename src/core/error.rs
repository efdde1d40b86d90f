use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipNodesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Python environment error: {0}")]
    Python(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Command timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PipNodesError>;
