//! Serializable construction parameters
//!
//! Any serde format can carry these; reading configuration files is left to
//! the caller.

use super::dispatcher::{DispatchMode, DEFAULT_QUEUE_CAPACITY};
use super::error::{LoggerError, Result};
use super::log_level;
use super::logger::Logger;
use super::output_format::OutputFormat;
use crate::sinks::{ArchiveSuffix, DiscardSink, FileSink, RotationPolicy, StreamSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Threshold given either as a raw number or as a level name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Code(u16),
    Name(String),
}

impl Threshold {
    /// Numeric floor; names must be one of the eight tiers
    pub fn resolve(&self) -> Result<u16> {
        match self {
            Threshold::Code(code) => Ok(*code),
            Threshold::Name(name) => name
                .parse::<log_level::LogLevel>()
                .map(|level| level.code())
                .map_err(|e| LoggerError::config("threshold", e)),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Code(0)
    }
}

/// Sink selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    File {
        path: PathBuf,
        /// Rotation limit in bytes; 0 disables rotation
        #[serde(default)]
        max_file_size: u64,
        #[serde(default)]
        archive_suffix: ArchiveSuffix,
        #[serde(default)]
        format: OutputFormat,
    },
    Stdout {
        #[serde(default)]
        format: OutputFormat,
    },
    Stderr {
        #[serde(default)]
        format: OutputFormat,
    },
    Discard,
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig::Stdout {
            format: OutputFormat::default(),
        }
    }
}

/// Configuration for a [`Logger`]
///
/// # Example
///
/// ```
/// use tiered_logger::LoggerConfig;
///
/// let config: LoggerConfig = serde_json::from_str(r#"{
///     "threshold": "warning",
///     "sink": { "type": "stderr", "format": "text" }
/// }"#)?;
///
/// let logger = config.build()?;
/// assert_eq!(logger.threshold(), 300);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub threshold: Threshold,
    /// Hand writes to a background worker instead of writing inline
    #[serde(default, rename = "async")]
    pub async_dispatch: bool,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default)]
    pub sink: SinkConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl LoggerConfig {
    /// Create a LoggerConfig with defaults (threshold 0, stdout, sync)
    pub fn new() -> Self {
        Self {
            threshold: Threshold::default(),
            async_dispatch: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            sink: SinkConfig::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_async(mut self, async_dispatch: bool) -> Self {
        self.async_dispatch = async_dispatch;
        self
    }

    pub fn with_sink(mut self, sink: SinkConfig) -> Self {
        self.sink = sink;
        self
    }

    /// Validate the configuration and construct the logger
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown threshold
    /// name, a zero queue capacity in async mode, or an unusable file path.
    pub fn build(&self) -> Result<Logger> {
        let threshold = self.threshold.resolve()?;

        let mode = if self.async_dispatch {
            if self.queue_capacity == 0 {
                return Err(LoggerError::config(
                    "queue_capacity",
                    "async dispatch needs a queue capacity of at least 1",
                ));
            }
            DispatchMode::Async
        } else {
            DispatchMode::Sync
        };

        let builder = Logger::builder().threshold(threshold);
        let builder = match &self.sink {
            SinkConfig::File {
                path,
                max_file_size,
                archive_suffix,
                format,
            } => {
                let policy = RotationPolicy::new(*max_file_size).with_suffix(*archive_suffix);
                builder.sink(FileSink::with_policy(path.clone(), policy)?.with_format(*format))
            }
            SinkConfig::Stdout { format } => builder.sink(StreamSink::stdout().with_format(*format)),
            SinkConfig::Stderr { format } => builder.sink(StreamSink::stderr().with_format(*format)),
            SinkConfig::Discard => builder.sink(DiscardSink::new()),
        };

        let builder = match mode {
            DispatchMode::Async => builder.async_mode(self.queue_capacity),
            DispatchMode::Sync => builder,
        };

        Ok(builder.build())
    }
}
