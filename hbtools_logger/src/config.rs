//! # Logger Configuration
//!
//! [`LoggerOptions`] is what one `create` call needs. [`LoggingConfig`] groups
//! options for several named loggers and is read from TOML:
//!
//! ```toml
//! [loggers.svc]
//! log_dir = "logs"
//! verbose_level = "debug"
//!
//! [loggers.audit]
//! log_dir = "logs/audit"
//! stdout = false
//! verbose_level = "error"
//! ```
//!
//! Omitted fields take the same defaults as [`LoggerOptions::default`].

use crate::error::Result;
use crate::severity::VerboseLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerOptions {
    /// Directory for `<name>.log`; created with its parents when missing.
    pub log_dir: Option<PathBuf>,
    /// Also print to standard output.
    pub stdout: bool,
    pub verbose_level: VerboseLevel,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            log_dir: None,
            stdout: true,
            verbose_level: VerboseLevel::Info,
        }
    }
}

impl LoggerOptions {
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn with_verbose_level(mut self, verbose_level: VerboseLevel) -> Self {
        self.verbose_level = verbose_level;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub loggers: BTreeMap<String, LoggerOptions>,
}

impl LoggingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn logger(&self, name: &str) -> Option<&LoggerOptions> {
        self.loggers.get(name)
    }
}
