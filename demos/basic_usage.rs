//! Basic logger usage example
//!
//! Demonstrates synchronous console logging, thresholds and placeholders.
//!
//! Run with: cargo run --example basic_usage

use tiered_logger::prelude::*;
use tiered_logger::{critical, info, warning};

fn main() -> Result<()> {
    println!("=== Tiered Logger - Basic Usage Example ===\n");

    // Text output with coloured levels
    let logger = Logger::new(
        StreamSink::stdout()
            .with_format(OutputFormat::Text)
            .with_colors(true),
    );

    println!("1. Logging at every level:");
    for level in LogLevel::ALL {
        logger.log(
            level,
            "This is a {name} message",
            LogContext::new().with_field("name", level.to_str().to_lowercase()),
        )?;
    }

    println!("\n2. Raising the threshold:");
    let logger = Logger::builder()
        .min_level(LogLevel::Warning)
        .sink(StreamSink::stdout().with_format(OutputFormat::Text))
        .build();
    println!("   Threshold set to WARNING - debug and info won't show:");
    logger.debug("Debug message (hidden)", LogContext::new())?;
    info!(logger, "Info message (hidden)")?;
    warning!(logger, "Warning message (visible)")?;
    critical!(logger, "Critical message (visible)")?;

    println!("\n3. Structured output with context:");
    let logger = Logger::new(StreamSink::stdout());
    info!(
        logger,
        "User {user} logged in from {ip}",
        user = "alice",
        ip = "10.0.0.7",
        attempts = 1,
    )?;
    logger.log("loud", "Unknown level names are recorded as UNKNOWN", LogContext::new())?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
