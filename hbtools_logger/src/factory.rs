//! # Logger Factory
//!
//! The [`LoggerFactory`] is the registry of named loggers. Applications create
//! one at startup and pass it (or the loggers it hands out) to whatever needs
//! to log; there is no process-global lookup.
//!
//! `create` is a one-shot setup call:
//!
//! 1. Reject options that would leave the logger without any sink.
//! 2. Look up the logger by name, registering a new one if needed.
//! 3. With a `log_dir`, create the directory and attach a rotating file
//!    handler on `<log_dir>/<name>.log`.
//! 4. With `stdout`, attach a console handler.
//! 5. Set the threshold.
//!
//! Calling `create` again for the same name returns the same logger with the
//! new handlers appended after the existing ones.

use crate::config::{LoggerOptions, LoggingConfig};
use crate::error::{LoggerError, Result};
use crate::format::ConsoleStyle;
use crate::handler::{ConsoleHandler, MakeConsoleWriter, RotatingFileHandler};
use crate::logger::Logger;
use crate::severity::VerboseLevel;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

pub struct LoggerFactory {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    console_style: ConsoleStyle,
    make_console_writer: MakeConsoleWriter,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory {
    /// Factory whose console handlers write to process stdout.
    pub fn new() -> Self {
        Self::with_console_writer(ConsoleStyle::for_platform(), || {
            Box::new(io::stdout()) as Box<dyn Write + Send>
        })
    }

    /// Factory whose console handlers write to writers produced by `make`.
    pub fn with_console_writer<F>(style: ConsoleStyle, make: F) -> Self
    where
        F: Fn() -> Box<dyn Write + Send> + Send + Sync + 'static,
    {
        Self {
            loggers: Mutex::new(HashMap::new()),
            console_style: style,
            make_console_writer: Arc::new(make),
        }
    }

    /// Configures the logger called `name` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] when `options` has no
    /// `log_dir` and `stdout` is false. Filesystem errors from creating the
    /// directory or opening the log file are returned unchanged as
    /// [`LoggerError::Io`].
    pub fn create(&self, name: &str, options: &LoggerOptions) -> Result<Arc<Logger>> {
        if options.log_dir.is_none() && !options.stdout {
            return Err(LoggerError::InvalidConfiguration {
                log_dir: None,
                stdout: false,
            });
        }

        // Open the file before touching the registry so a failed call leaves
        // no half-configured logger behind.
        let file_handler = match &options.log_dir {
            Some(log_dir) => {
                std::fs::create_dir_all(log_dir)?;
                Some(RotatingFileHandler::open(log_file_path(log_dir, name))?)
            }
            None => None,
        };

        let logger = self.get_or_register(name);
        if let Some(handler) = file_handler {
            logger.add_handler(Arc::new(handler));
        }
        if options.stdout {
            logger.add_handler(Arc::new(ConsoleHandler::with_writer(
                self.console_style,
                (self.make_console_writer)(),
            )));
        }
        logger.set_threshold(options.verbose_level.severity());

        debug!(
            logger = name,
            log_dir = ?options.log_dir,
            stdout = options.stdout,
            verbose_level = %options.verbose_level,
            handlers = logger.handler_count(),
            "configured logger"
        );
        Ok(logger)
    }

    /// Flat-argument form of [`create`](Self::create).
    pub fn create_logger(
        &self,
        name: &str,
        log_dir: Option<&Path>,
        stdout: bool,
        verbose_level: VerboseLevel,
    ) -> Result<Arc<Logger>> {
        let options = LoggerOptions {
            log_dir: log_dir.map(Path::to_path_buf),
            stdout,
            verbose_level,
        };
        self.create(name, &options)
    }

    /// Creates every logger in `config`, in name order.
    pub fn create_from_config(&self, config: &LoggingConfig) -> Result<Vec<Arc<Logger>>> {
        config
            .loggers
            .iter()
            .map(|(name, options)| self.create(name, options))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.registry().get(name).cloned()
    }

    /// Names of all registered loggers, sorted.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    fn get_or_register(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.registry();
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name)));
        Arc::clone(logger)
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("loggers", &self.logger_names())
            .field("console_style", &self.console_style)
            .finish_non_exhaustive()
    }
}

/// `<log_dir>/<name>.log`
pub fn log_file_path(log_dir: &Path, name: &str) -> PathBuf {
    log_dir.join(format!("{name}.log"))
}
