//! No-op sink

use crate::core::{LogEntry, Result, Sink};

/// Accepts every entry and does nothing with it
///
/// Useful where a logger must exist but should stay silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl DiscardSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for DiscardSink {
    #[inline]
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
