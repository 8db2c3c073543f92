//! # hbtools_logger
//!
//! Minimal setup of named loggers for command-line tools and services.
//!
//! A [`LoggerFactory`] owns every logger the application creates. One call to
//! [`LoggerFactory::create`] attaches a console handler (colored by severity on
//! terminals outside Windows) and/or a size-bounded rotating file handler, then
//! sets the severity threshold:
//!
//! ```rust,no_run
//! use hbtools_logger::{LoggerFactory, LoggerOptions, VerboseLevel};
//!
//! let factory = LoggerFactory::new();
//! let logger = factory
//!     .create(
//!         "svc",
//!         &LoggerOptions::default()
//!             .with_log_dir("logs")
//!             .with_verbose_level(VerboseLevel::Debug),
//!     )
//!     .expect("logger setup");
//!
//! logger.info("service started");
//! // console: "INFO - service started"
//! // logs/svc.log: "2024-05-01 09:30:12,004 - svc - INFO - service started"
//! ```
//!
//! Loggers can also receive `tracing` events through [`LoggerLayer`].

pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod handler;
pub mod logger;
pub mod record;
pub mod severity;
pub mod tracing_bridge;

pub use config::{LoggerOptions, LoggingConfig};
pub use error::{LoggerError, Result};
pub use factory::LoggerFactory;
pub use format::ConsoleStyle;
pub use handler::{ConsoleHandler, Handler, RotatingFileHandler};
pub use logger::Logger;
pub use record::Record;
pub use severity::{Severity, VerboseLevel};
pub use tracing_bridge::LoggerLayer;
