//! Size-bounded log file with numbered backups.
//!
//! Built on log4rs' rolling appender: once a write takes `svc.log` past
//! `max_bytes`, the backups shift up by one (`svc.log.1` becomes
//! `svc.log.2`, and so on), the oldest one beyond `backup_count` is dropped,
//! `svc.log` becomes `svc.log.1` and the next record starts a fresh `svc.log`.

use super::Handler;
use crate::error::{LoggerError, Result};
use crate::format::file_line;
use crate::record::Record;
use crate::severity::Severity;
use log4rs::append::Append;
use log4rs::append::file::FileAppender;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::encode::pattern::PatternEncoder;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_BYTES: u64 = 500_000;
pub const DEFAULT_BACKUP_COUNT: usize = 2;

/// Lines are fully formatted by [`file_line`]; the encoder only ends them.
const LINE_PATTERN: &str = "{m}{n}";

#[derive(Debug)]
pub struct RotatingFileHandler {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    appender: Box<dyn Append>,
}

impl RotatingFileHandler {
    /// Opens (or creates) `path` with the default 500 kB / 2 backups limits.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUP_COUNT)
    }

    /// A `max_bytes` or `backup_count` of zero disables rotation.
    pub fn with_limits(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
    ) -> Result<Self> {
        let path = path.into();
        let encoder = Box::new(PatternEncoder::new(LINE_PATTERN));

        let appender: Box<dyn Append> = if max_bytes == 0 || backup_count == 0 {
            Box::new(
                FileAppender::builder()
                    .encoder(encoder)
                    .append(true)
                    .build(&path)?,
            )
        } else {
            let roller = FixedWindowRoller::builder()
                .base(1)
                .build(&backup_pattern(&path)?, backup_count as u32)
                .map_err(LoggerError::from_appender)?;
            let policy = CompoundPolicy::new(
                Box::new(SizeTrigger::new(max_bytes)),
                Box::new(roller),
            );
            Box::new(
                RollingFileAppender::builder()
                    .encoder(encoder)
                    .append(true)
                    .build(&path, Box::new(policy))?,
            )
        };

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            appender,
        })
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn backup_count(&self) -> usize {
        self.backup_count
    }

    /// Path of the `index`-th backup, e.g. `svc.log.1`.
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

impl Handler for RotatingFileHandler {
    fn emit(&self, record: &Record<'_>) -> Result<()> {
        let line = file_line(record);
        self.appender
            .append(
                &log::Record::builder()
                    .args(format_args!("{line}"))
                    .level(log_level(record.severity))
                    .target(record.logger)
                    .build(),
            )
            .map_err(LoggerError::from_appender)
    }

    fn flush(&self) -> Result<()> {
        self.appender.flush();
        Ok(())
    }
}

/// `<path>.{}`, the window pattern the roller fills with backup indices.
fn backup_pattern(path: &Path) -> io::Result<String> {
    path.to_str()
        .map(|p| format!("{p}.{{}}"))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log file path is not valid UTF-8: {}", path.display()),
            )
        })
}

fn log_level(severity: Severity) -> log::Level {
    match severity {
        Severity::Debug => log::Level::Debug,
        Severity::Info => log::Level::Info,
        Severity::Warning => log::Level::Warn,
        Severity::Error | Severity::Critical => log::Level::Error,
    }
}
