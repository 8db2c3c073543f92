//! # hblog CLI
//!
//! Sets up a logger exactly like a service would and feeds it messages from
//! the command line or, when none are given, one message per stdin line:
//!
//! ```text
//! hblog --name svc --log-dir logs --verbose-level debug "service started"
//! some_command 2>&1 | hblog --name build --log-dir logs --no-stdout
//! hblog --name svc --config logging.toml --level error "disk almost full"
//! ```

use crate::config::{LoggerOptions, LoggingConfig};
use crate::factory::LoggerFactory;
use crate::severity::{Severity, VerboseLevel};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, stderr};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

/// Log messages through a named console and/or rotating-file logger.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Logger name; also the log file stem (`<log-dir>/<name>.log`)
    #[arg(long)]
    pub name: String,

    /// Directory for the rotating log file (created if missing)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Do not print to stdout
    #[arg(long)]
    pub no_stdout: bool,

    /// Threshold below which messages are dropped
    #[arg(long, value_enum, default_value_t = VerboseLevel::Info)]
    pub verbose_level: VerboseLevel,

    /// TOML file with a `[loggers.<name>]` table; replaces the three flags above
    #[arg(long, conflicts_with_all = ["log_dir", "no_stdout", "verbose_level"])]
    pub config: Option<PathBuf>,

    /// Severity of the messages being logged
    #[arg(long, value_enum, default_value_t = MessageLevel::Info)]
    pub level: MessageLevel,

    /// Messages to log; stdin lines are used when empty
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<MessageLevel> for Severity {
    fn from(level: MessageLevel) -> Self {
        match level {
            MessageLevel::Debug => Severity::Debug,
            MessageLevel::Info => Severity::Info,
            MessageLevel::Warning => Severity::Warning,
            MessageLevel::Error => Severity::Error,
            MessageLevel::Critical => Severity::Critical,
        }
    }
}

impl Cli {
    /// Options for the logger, from `--config` when given, else from flags.
    pub fn logger_options(&self) -> Result<LoggerOptions> {
        match &self.config {
            Some(path) => {
                let config = LoggingConfig::load(path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                config.logger(&self.name).cloned().ok_or_else(|| {
                    anyhow!(
                        "{} has no [loggers.{}] table",
                        path.display(),
                        self.name
                    )
                })
            }
            None => Ok(LoggerOptions {
                log_dir: self.log_dir.clone(),
                stdout: !self.no_stdout,
                verbose_level: self.verbose_level,
            }),
        }
    }
}

/// Diagnostics of the tool itself go to stderr, filtered by `RUST_LOG`.
fn init_diagnostics() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer().with_writer(stderr).with_ansi(false))
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_diagnostics();
    run_with(&cli, &LoggerFactory::new())
}

pub fn run_with(cli: &Cli, factory: &LoggerFactory) -> Result<()> {
    let options = cli.logger_options()?;
    let logger = factory
        .create(&cli.name, &options)
        .with_context(|| format!("failed to set up logger '{}'", cli.name))?;
    let severity = Severity::from(cli.level);

    if cli.messages.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            logger.try_log(severity, line)?;
        }
    } else {
        for message in &cli.messages {
            logger.try_log(severity, message)?;
        }
    }

    logger.flush()?;
    Ok(())
}
