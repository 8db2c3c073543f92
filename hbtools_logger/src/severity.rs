//! Severity levels and the thresholds selectable at logger creation.

use crate::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered importance of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    /// Upper-case label written in front of every message.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    pub(crate) fn from_repr(value: u8) -> Self {
        match value {
            v if v <= Severity::Debug as u8 => Severity::Debug,
            v if v <= Severity::Info as u8 => Severity::Info,
            v if v <= Severity::Warning as u8 => Severity::Warning,
            v if v <= Severity::Error as u8 => Severity::Error,
            _ => Severity::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold a logger can be created with.
///
/// Only three of the five severities are selectable; `WARNING` and `CRITICAL`
/// records are still emitted and formatted, they just cannot be the cut-off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VerboseLevel {
    Debug,
    #[default]
    Info,
    Error,
}

impl VerboseLevel {
    pub fn severity(self) -> Severity {
        match self {
            VerboseLevel::Debug => Severity::Debug,
            VerboseLevel::Info => Severity::Info,
            VerboseLevel::Error => Severity::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerboseLevel::Debug => "debug",
            VerboseLevel::Info => "info",
            VerboseLevel::Error => "error",
        }
    }
}

impl fmt::Display for VerboseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerboseLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(VerboseLevel::Debug),
            "info" => Ok(VerboseLevel::Info),
            "error" => Ok(VerboseLevel::Error),
            _ => Err(LoggerError::UnknownVerboseLevel(s.to_string())),
        }
    }
}
