use crate::severity::Severity;
use chrono::{DateTime, Local};

/// One event handed to every handler of a logger.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub logger: &'a str,
    pub severity: Severity,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Creates a record stamped with the current local time.
    pub fn now(logger: &'a str, severity: Severity, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            logger,
            severity,
            message,
        }
    }
}
