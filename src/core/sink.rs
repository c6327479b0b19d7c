//! Sink trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A backend that records log entries
///
/// Sinks hold only their configuration, so `write` takes `&self` and a sink
/// can be shared with the async worker behind an `Arc<dyn Sink>`.
pub trait Sink: Send + Sync {
    fn write(&self, entry: &LogEntry) -> Result<()>;
    fn name(&self) -> &str;
}
