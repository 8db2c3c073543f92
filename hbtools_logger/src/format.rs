//! Line formats for the console and file handlers.
//!
//! The console format is a strategy picked once when the handler is built:
//! colored labels everywhere except Windows consoles, which get plain text.

use crate::record::Record;
use crate::severity::Severity;
use owo_colors::{OwoColorize, Style};

/// Timestamp layout of file lines, e.g. `2024-05-01 09:30:12,004`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStyle {
    /// `LEVEL - message` with LEVEL wrapped in an ANSI color.
    Colored,
    /// `LEVEL - message` without escape codes.
    Plain,
}

impl ConsoleStyle {
    /// Plain on Windows, colored everywhere else.
    pub fn for_platform() -> Self {
        if cfg!(windows) {
            ConsoleStyle::Plain
        } else {
            ConsoleStyle::Colored
        }
    }

    pub fn format(self, record: &Record<'_>) -> String {
        match self {
            ConsoleStyle::Plain => format!("{} - {}", record.severity.label(), record.message),
            ConsoleStyle::Colored => {
                let label = record.severity.label();
                match label_style(record.severity) {
                    Some(style) => format!("{} - {}", label.style(style), record.message),
                    None => format!("{} - {}", label, record.message),
                }
            }
        }
    }
}

/// Styled labels end with the full reset `ESC[0m`.
fn label_style(severity: Severity) -> Option<Style> {
    match severity {
        Severity::Error => Some(Style::new().bright_red()),
        // bright yellow renders as orange on most terminal palettes
        Severity::Warning => Some(Style::new().bright_yellow()),
        Severity::Info => Some(Style::new().bright_green()),
        Severity::Debug => Some(Style::new().bright_blue()),
        Severity::Critical => None,
    }
}

/// `timestamp - name - LEVEL - message`
pub fn file_line(record: &Record<'_>) -> String {
    format!(
        "{} - {} - {} - {}",
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.logger,
        record.severity.label(),
        record.message
    )
}
