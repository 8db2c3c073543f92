use super::Handler;
use crate::error::Result;
use crate::format::ConsoleStyle;
use crate::record::Record;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Produces the writer a new console handler writes to.
pub type MakeConsoleWriter = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

/// Writes `LEVEL - message` lines to standard output (or any injected writer).
pub struct ConsoleHandler {
    style: ConsoleStyle,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleHandler {
    pub fn with_writer(style: ConsoleStyle, writer: Box<dyn Write + Send>) -> Self {
        Self {
            style,
            writer: Mutex::new(writer),
        }
    }
}

impl fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Handler for ConsoleHandler {
    fn emit(&self, record: &Record<'_>) -> Result<()> {
        let line = self.style.format(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
