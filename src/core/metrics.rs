//! Logger metrics for observability
//!
//! Best-effort paths (async dispatch) never surface write failures to the
//! caller, so these counters are the only place those outcomes show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what happened to each logging call
///
/// # Example
///
/// ```
/// use tiered_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries a sink accepted
    written: AtomicU64,

    /// Entries a sink rejected with an error
    failed: AtomicU64,

    /// Entries that never reached a sink (async queue full or closed)
    dropped: AtomicU64,

    /// Entries filtered out by the threshold
    suppressed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Record a successful write, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emitted entries that were lost, as a percentage (0.0 - 100.0)
    ///
    /// Suppressed entries are not counted; they were never meant to be written.
    pub fn loss_rate(&self) -> f64 {
        let lost = (self.failed_count() + self.dropped_count()) as f64;
        let total = self.written_count() as f64 + lost;
        if total == 0.0 {
            0.0
        } else {
            (lost / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            written: AtomicU64::new(self.written_count()),
            failed: AtomicU64::new(self.failed_count()),
            dropped: AtomicU64::new(self.dropped_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.written_count(), 0);
        assert_eq!(metrics.failed_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        assert_eq!(metrics.dropped_count(), 2);
    }

    #[test]
    fn test_loss_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.loss_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..5 {
            metrics.record_failed();
            metrics.record_dropped();
        }
        for _ in 0..50 {
            metrics.record_suppressed();
        }

        let rate = metrics.loss_rate();
        assert!((9.9..=10.1).contains(&rate), "Loss rate was {}", rate);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(snapshot.written_count(), 1);
        assert_eq!(metrics.written_count(), 2);
    }
}
