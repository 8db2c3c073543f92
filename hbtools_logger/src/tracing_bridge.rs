//! Routes `tracing` events into a [`Logger`].
//!
//! ```rust,no_run
//! use hbtools_logger::{LoggerFactory, LoggerLayer, LoggerOptions};
//! use tracing_subscriber::prelude::*;
//!
//! let factory = LoggerFactory::new();
//! let logger = factory.create("svc", &LoggerOptions::default()).unwrap();
//! tracing_subscriber::registry()
//!     .with(LoggerLayer::new(logger))
//!     .init();
//!
//! tracing::info!(port = 8080, "listening");
//! // console: "INFO - listening port=8080"
//! ```

use crate::logger::Logger;
use crate::severity::Severity;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Target of this crate's own diagnostics, which are never forwarded.
const OWN_TARGET: &str = "hbtools_logger";

fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(OWN_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" && self.message.is_none() {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }

    fn into_message(self, fallback: &str) -> String {
        let mut message = self.message.unwrap_or_else(|| fallback.to_string());
        for (key, value) in self.fields {
            message.push(' ');
            message.push_str(&key);
            message.push('=');
            message.push_str(&value);
        }
        message
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let severity = severity_for(metadata.level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        self.logger
            .log(severity, collector.into_message(metadata.name()));
    }
}
