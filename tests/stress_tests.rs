//! Stress tests for the async dispatch queue and file rotation
//!
//! These tests verify:
//! - Every entry is accounted for as written or dropped under overflow
//! - Concurrent callers never block on a full queue
//! - Shutdown drains whatever was accepted
//! - Repeated rotations within one second lose no lines

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tiered_logger::prelude::*;
use tiered_logger::DEFAULT_SHUTDOWN_TIMEOUT;

/// Sink that is much slower than the callers feeding it
struct SlowSink {
    writes: Arc<AtomicU64>,
    delay: Duration,
}

impl Sink for SlowSink {
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        thread::sleep(self.delay);
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

#[test]
fn test_overflow_drops_are_counted() {
    let writes = Arc::new(AtomicU64::new(0));
    let mut logger = Logger::builder()
        .sink(SlowSink {
            writes: Arc::clone(&writes),
            delay: Duration::from_millis(2),
        })
        .async_mode(5)
        .build();

    for i in 0..500 {
        logger
            .debug("flood {i}", LogContext::new().with_field("i", i))
            .unwrap();
    }

    assert!(logger.shutdown(Duration::from_secs(10)));

    let metrics = logger.metrics();
    assert!(metrics.dropped_count() > 0, "Tiny queue should overflow");
    assert_eq!(metrics.written_count(), writes.load(Ordering::Relaxed));
    assert_eq!(metrics.written_count() + metrics.dropped_count(), 500);
    assert!(metrics.loss_rate() > 0.0);
}

#[test]
fn test_concurrent_callers_on_full_queue() {
    let writes = Arc::new(AtomicU64::new(0));
    let logger = Arc::new(
        Logger::builder()
            .sink(SlowSink {
                writes: Arc::clone(&writes),
                delay: Duration::from_millis(1),
            })
            .async_mode(16)
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..200 {
                    let context = LogContext::new().with_field("thread", t).with_field("i", i);
                    logger.warning("thread {thread} message {i}", context).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Caller thread panicked");
    }

    let mut logger = Arc::try_unwrap(logger).unwrap_or_else(|_| panic!("Logger still shared"));
    assert!(logger.shutdown(Duration::from_secs(30)));

    let metrics = logger.metrics();
    assert_eq!(metrics.written_count() + metrics.dropped_count(), 1600);
    assert_eq!(metrics.written_count(), writes.load(Ordering::Relaxed));
}

#[test]
fn test_large_queue_loses_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("burst.log");

    let mut logger = Logger::builder()
        .sink(FileSink::new(&log_file, 0).expect("Failed to create sink"))
        .async_mode(10_000)
        .build();

    for i in 0..5_000 {
        logger
            .critical("burst {i}", LogContext::new().with_field("i", i))
            .unwrap();
    }

    assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT * 6));
    assert_eq!(logger.metrics().dropped_count(), 0);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 5_000);
}

#[test]
fn test_rotation_under_sustained_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("busy.log");

    let logger = Logger::new(FileSink::new(&log_file, 4096).expect("Failed to create sink"));
    for i in 0..400 {
        logger
            .info("entry {i}", LogContext::new().with_field("i", i))
            .unwrap();
    }
    assert_eq!(logger.metrics().written_count(), 400);

    // Many rotations land in the same second; none may cost a line
    let mut seen = Vec::new();
    let mut archives = 0;
    for entry in std::fs::read_dir(temp_dir.path()).unwrap() {
        let path = entry.unwrap().path();
        if path != log_file {
            archives += 1;
        }
        for line in std::fs::read_to_string(&path).unwrap().lines() {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            seen.push(record["context"]["i"].as_i64().unwrap());
        }
    }
    seen.sort_unstable();

    assert!(archives > 1, "Expected several rotations");
    assert_eq!(seen, (0..400).collect::<Vec<i64>>());

    let size = std::fs::metadata(&log_file).unwrap().len();
    assert!(size < 8192, "Live file grew to {} bytes", size);
}
