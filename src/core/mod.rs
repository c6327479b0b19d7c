//! Core logger types and traits

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interpolate;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink;

pub use config::{LoggerConfig, SinkConfig, Threshold};
pub use dispatcher::{DispatchMode, Dispatcher, DEFAULT_QUEUE_CAPACITY};
pub use error::{LoggerError, Result};
pub use interpolate::interpolate;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::{label, normalize, IntoSeverity, LogLevel};
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use sink::Sink;
