//! File logging example
//!
//! Demonstrates a rotating file sink alongside console output.
//!
//! Run with: cargo run --example file_logging

use tiered_logger::prelude::*;
use tiered_logger::{error, info, warning};

fn main() -> Result<()> {
    println!("=== Tiered Logger - File Logging Example ===\n");

    // Rotate after 2 KB so the example produces an archive
    let file = Logger::builder()
        .min_level(LogLevel::Info)
        .sink(FileSink::new("application.log", 2048)?)
        .build();
    let console = Logger::new(StreamSink::stderr().with_format(OutputFormat::Text));

    println!("1. Logging to both console and file:");
    for logger in [&file, &console] {
        info!(logger, "Application started")?;
        logger.debug("Loading configuration...", LogContext::new())?;
        warning!(logger, "Using default settings for {count} options", count = 2)?;
        error!(logger, "Failed to load plugin {plugin}", plugin = "metrics")?;
    }

    println!("\n2. Performing some operations:");
    for i in 1..=40 {
        info!(file, "Processing item {i}/40", i = i)?;
        if i == 30 {
            warning!(console, "Item {i} took longer than expected", i = i)?;
        }
    }

    println!("\n3. Text format with a different archive suffix:");
    let audit = Logger::new(
        FileSink::new("audit.log", 0)?
            .with_format(OutputFormat::Text)
            .with_archive_suffix(ArchiveSuffix::UnixEpoch),
    );
    audit.notice(
        "Config reloaded by {user}",
        LogContext::new().with_field("user", "operator"),
    )?;

    println!(
        "   written={} failed={}",
        file.metrics().written_count(),
        file.metrics().failed_count()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' (and its archives) and 'audit.log'");

    Ok(())
}
