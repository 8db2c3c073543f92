//! Output sinks attached to a [`Logger`](crate::Logger).

mod console;
mod rotating_file;

pub use console::{ConsoleHandler, MakeConsoleWriter};
pub use rotating_file::{DEFAULT_BACKUP_COUNT, DEFAULT_MAX_BYTES, RotatingFileHandler};

use crate::error::Result;
use crate::record::Record;
use std::fmt;

/// A destination for records that passed the logger's threshold.
///
/// Handlers are shared between threads; implementations serialize their own
/// writes.
pub trait Handler: Send + Sync + fmt::Debug {
    fn emit(&self, record: &Record<'_>) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
