//! # Named Logger
//!
//! A [`Logger`] is a name, a threshold and an ordered list of handlers. It is
//! obtained from a [`LoggerFactory`](crate::LoggerFactory) and shared as an
//! `Arc<Logger>`; every method takes `&self` so the handle can be used from
//! any number of threads.

use crate::error::Result;
use crate::handler::Handler;
use crate::record::Record;
use crate::severity::Severity;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

pub struct Logger {
    name: String,
    threshold: AtomicU8,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
}

impl Logger {
    /// A logger with no handlers and a `WARNING` threshold.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: AtomicU8::new(Severity::Warning as u8),
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        Severity::from_repr(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_threshold(&self, severity: Severity) {
        self.threshold.store(severity as u8, Ordering::Relaxed);
    }

    /// Appends a handler; existing handlers are kept.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold()
    }

    /// Sends `message` to every handler, stopping at the first failing one.
    ///
    /// Records below the threshold are dropped and return `Ok`.
    pub fn try_log(&self, severity: Severity, message: impl fmt::Display) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let message = message.to_string();
        let record = Record::now(&self.name, severity, &message);
        for handler in self.handlers.read().unwrap_or_else(PoisonError::into_inner).iter() {
            handler.emit(&record)?;
        }
        Ok(())
    }

    /// Sends `message` to every handler.
    ///
    /// A failing handler does not keep the record from the remaining ones; the
    /// failure is reported as a `tracing` warning.
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if !self.is_enabled(severity) {
            return;
        }
        let message = message.to_string();
        let record = Record::now(&self.name, severity, &message);
        for handler in self.handlers.read().unwrap_or_else(PoisonError::into_inner).iter() {
            if let Err(e) = handler.emit(&record) {
                warn!(logger = %self.name, ?handler, error = %e, "log handler failed");
            }
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message);
    }

    /// Flushes every handler, returning the first error.
    pub fn flush(&self) -> Result<()> {
        for handler in self.handlers.read().unwrap_or_else(PoisonError::into_inner).iter() {
            handler.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoggerError;
    use std::io;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Collect(Mutex<Vec<(Severity, String)>>);

    impl Handler for Collect {
        fn emit(&self, record: &Record<'_>) -> Result<()> {
            self.0
                .lock()
                .unwrap()
                .push((record.severity, record.message.to_string()));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Handler for Broken {
        fn emit(&self, _record: &Record<'_>) -> Result<()> {
            Err(io::Error::other("disk full").into())
        }
    }

    #[test]
    fn threshold_filters_lower_severities() {
        let logger = Logger::new("svc");
        let sink = Arc::new(Collect::default());
        logger.add_handler(sink.clone());
        logger.set_threshold(Severity::Error);

        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        let seen = sink.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (Severity::Error, "e".to_string()),
                (Severity::Critical, "c".to_string())
            ]
        );
    }

    #[test]
    fn new_logger_defaults_to_warning() {
        let logger = Logger::new("fresh");
        assert_eq!(logger.threshold(), Severity::Warning);
        assert_eq!(logger.handler_count(), 0);
        assert!(!logger.is_enabled(Severity::Info));
    }

    #[test]
    fn failing_handler_does_not_block_later_ones() {
        let logger = Logger::new("svc");
        let sink = Arc::new(Collect::default());
        logger.add_handler(Arc::new(Broken));
        logger.add_handler(sink.clone());
        logger.set_threshold(Severity::Debug);

        logger.info("still delivered");
        assert_eq!(sink.0.lock().unwrap().len(), 1);

        let err = logger.try_log(Severity::Info, "surfaced").unwrap_err();
        assert!(matches!(err, LoggerError::Io(_)));
    }

    #[test]
    fn logger_is_shareable_across_threads() {
        let logger = Arc::new(Logger::new("threads"));
        let sink = Arc::new(Collect::default());
        logger.add_handler(sink.clone());
        logger.set_threshold(Severity::Info);

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for j in 0..25 {
                        logger.info(format!("{i}-{j}"));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(sink.0.lock().unwrap().len(), 100);
    }
}
