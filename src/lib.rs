//! # Tiered Logger
//!
//! A severity-leveled logger: messages are filtered against a numeric
//! threshold, `{placeholder}` tokens are filled from key/value context, and
//! the resulting entry is written to one interchangeable sink.
//!
//! ## Features
//!
//! - **Eight fixed tiers**: debug (100) through emergency (600)
//! - **Interpolation**: `"User {id} did {action}"` filled from context
//! - **Sinks**: rotating file, stdout/stderr stream, discard
//! - **Dispatch**: inline writes or a fire-and-forget background worker
//!
//! ```
//! use tiered_logger::prelude::*;
//! use tiered_logger::info;
//!
//! let logger = Logger::new(StreamSink::stdout());
//! info!(logger, "User {id} did {action}", id = 123, action = "login")?;
//! # Ok::<(), tiered_logger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        DispatchMode, FieldValue, IntoSeverity, LogContext, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Result, Sink,
        SinkConfig,
    };
    pub use crate::sinks::{ArchiveSuffix, DiscardSink, FileSink, RotationPolicy, StreamSink};
}

pub use self::core::{
    interpolate, label, normalize, DispatchMode, FieldValue, IntoSeverity, LogContext, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat,
    Result, Sink, SinkConfig, Threshold, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use sinks::{ArchiveSuffix, DiscardSink, FileSink, RotationPolicy, StreamSink};
