use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgdeckError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// A single package operation could not be carried out.
    /// Always recovered by the worker and reported as a progress line.
    #[error("{details}")]
    OperationFailed { identifier: String, details: String },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl PkgdeckError {
    pub fn operation_failed(identifier: &str, details: impl Into<String>) -> Self {
        Self::OperationFailed {
            identifier: identifier.to_string(),
            details: details.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgdeckError>;
