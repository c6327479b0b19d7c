//! Async logging example
//!
//! Demonstrates fire-and-forget dispatch from several threads and an
//! explicit drain on shutdown.
//!
//! Run with: cargo run --example async_logging

use std::sync::Arc;
use std::thread;
use tiered_logger::prelude::*;
use tiered_logger::DEFAULT_SHUTDOWN_TIMEOUT;

fn main() -> Result<()> {
    println!("=== Tiered Logger - Async Logging Example ===\n");

    let config: LoggerConfig = serde_json::from_str(
        r#"{
            "threshold": "info",
            "async": true,
            "queue_capacity": 1000,
            "sink": { "type": "file", "path": "async_test.log" }
        }"#,
    )?;
    let logger = Arc::new(config.build()?);

    println!("1. High-performance async logging:");
    for i in 0..100 {
        logger.info("Message #{i}", LogContext::new().with_field("i", i))?;
    }
    println!("   Logged 100 messages asynchronously");

    println!("\n2. Multi-threaded logging:");
    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    let context = LogContext::new()
                        .with_field("thread", thread_id)
                        .with_field("i", i);
                    let _ = logger.info("Thread {thread} - message {i}", context);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
    println!("   4 threads logged 25 messages each");

    println!("\n3. Draining the queue:");
    let mut logger = match Arc::try_unwrap(logger) {
        Ok(logger) => logger,
        Err(_) => {
            eprintln!("Logger still shared; queued entries may be lost");
            return Ok(());
        }
    };
    if !logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
        eprintln!("Warning: logger shutdown timed out");
    }

    let metrics = logger.metrics();
    println!(
        "   written={} dropped={} failed={}",
        metrics.written_count(),
        metrics.dropped_count(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for the output");

    Ok(())
}
