//! Main logger implementation

use super::{
    dispatcher::{DispatchMode, Dispatcher, DEFAULT_QUEUE_CAPACITY},
    error::Result,
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::{self, IntoSeverity, LogLevel},
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::DiscardSink;
use std::sync::Arc;
use std::time::Duration;

/// Default time [`Logger::shutdown`] callers are expected to allow for draining
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Threshold-filtering logger writing to a single sink
///
/// Entries at or above the threshold are built, interpolated and handed to
/// the dispatcher; everything below is dropped silently.
///
/// # Example
///
/// ```
/// use tiered_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warning)
///     .sink(StreamSink::stdout())
///     .build();
///
/// // Suppressed: below the threshold
/// logger.info("cache warm", LogContext::new())?;
///
/// logger.error(
///     "request {id} failed",
///     LogContext::new().with_field("id", 42),
/// )?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
pub struct Logger {
    threshold: u16,
    sink: Arc<dyn Sink>,
    dispatcher: Dispatcher,
    /// Counters for written, failed, dropped and suppressed entries
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Synchronous logger that records everything (threshold 0)
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self::builder().sink(sink).build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether an entry at `level` would pass the threshold
    #[inline]
    pub fn is_enabled<L: IntoSeverity>(&self, level: L) -> bool {
        log_level::normalize(level) >= self.threshold
    }

    /// Log `message` at `level`, interpolating `{key}` tokens from `context`
    ///
    /// In synchronous mode the sink's result is returned. In asynchronous
    /// mode this always returns `Ok(())` once the entry is queued or dropped.
    /// Entries below the threshold return `Ok(())` without touching the sink.
    pub fn log<L: IntoSeverity>(&self, level: L, message: &str, context: LogContext) -> Result<()> {
        match LogEntry::build(level, message, context, self.threshold) {
            Some(entry) => self.dispatcher.dispatch(entry, &self.metrics),
            None => {
                self.metrics.record_suppressed();
                Ok(())
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Debug, message, context)
    }

    #[inline]
    pub fn info(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Info, message, context)
    }

    #[inline]
    pub fn notice(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Notice, message, context)
    }

    #[inline]
    pub fn warning(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Warning, message, context)
    }

    #[inline]
    pub fn error(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Error, message, context)
    }

    #[inline]
    pub fn critical(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Critical, message, context)
    }

    #[inline]
    pub fn alert(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Alert, message, context)
    }

    #[inline]
    pub fn emergency(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Emergency, message, context)
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.dispatcher.mode()
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use tiered_logger::prelude::*;
    ///
    /// let logger = Logger::new(DiscardSink::new());
    /// logger.info("hello", LogContext::new()).unwrap();
    ///
    /// assert_eq!(logger.metrics().written_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Wait for queued async entries to reach the sink
    ///
    /// This is the only delivery guarantee the async mode offers: without it,
    /// entries still queued when the process exits are lost. Returns `true`
    /// if the queue drained within `timeout`. Further async calls after
    /// shutdown are dropped. Synchronous loggers return `true` immediately.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tiered_logger::prelude::*;
    /// use tiered_logger::DEFAULT_SHUTDOWN_TIMEOUT;
    ///
    /// let mut logger = Logger::builder()
    ///     .sink(FileSink::new("app.log", 0)?)
    ///     .async_mode(1024)
    ///     .build();
    ///
    /// logger.info("Important message", LogContext::new())?;
    ///
    /// if !logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
    ///     eprintln!("Warning: logger shutdown timed out");
    /// }
    /// # Ok::<(), tiered_logger::LoggerError>(())
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.dispatcher.shutdown(timeout)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tiered_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(250)
///     .sink(StreamSink::stderr().with_format(OutputFormat::Text))
///     .async_mode(1000)
///     .build();
///
/// assert_eq!(logger.threshold(), 250);
/// ```
pub struct LoggerBuilder {
    threshold: u16,
    sink: Option<Arc<dyn Sink>>,
    mode: DispatchMode,
    queue_capacity: usize,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: 0,
            sink: None,
            mode: DispatchMode::Sync,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Set the raw numeric threshold (0 records everything)
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the threshold to a named tier
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.threshold = level.code();
        self
    }

    /// Set the sink; defaults to [`DiscardSink`]
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set a sink that is already shared elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Enable async mode with the given queue capacity
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, queue_capacity: usize) -> Self {
        self.mode = DispatchMode::Async;
        self.queue_capacity = queue_capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(DiscardSink::new()) as Arc<dyn Sink>);
        let metrics = Arc::new(LoggerMetrics::new());
        let dispatcher = Dispatcher::new(
            self.mode,
            Arc::clone(&sink),
            Arc::clone(&metrics),
            self.queue_capacity,
        );

        Logger {
            threshold: self.threshold,
            sink,
            dispatcher,
            metrics,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
