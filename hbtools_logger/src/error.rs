//! Error types for logger setup

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    /// Neither a log directory nor console output was requested, so the
    /// logger would have no sink at all.
    #[error(
        "either `log_dir` must be a path or `stdout` must be true, got log_dir={log_dir:?} and stdout={stdout}"
    )]
    InvalidConfiguration {
        log_dir: Option<PathBuf>,
        stdout: bool,
    },

    #[error("unknown verbose level '{0}' (expected one of: debug, info, error)")]
    UnknownVerboseLevel(String),

    #[error("invalid logging config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure reported by the file appender that is not a plain IO error.
    #[error(transparent)]
    Appender(anyhow::Error),
}

impl LoggerError {
    /// Keeps filesystem errors as [`LoggerError::Io`] so they surface unchanged.
    pub(crate) fn from_appender(error: anyhow::Error) -> Self {
        match error.downcast::<std::io::Error>() {
            Ok(io) => LoggerError::Io(io),
            Err(other) => LoggerError::Appender(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoggerError>;
