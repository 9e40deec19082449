//! Basic usage walkthrough for fanout_logger

use fanout_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Default logger: Info level, datetime timestamps, console transport
    let logger = Logger::new();
    logger.info("Application started");
    logger.debug("Filtered out at the default Info level");
    logger.success("Startup checks passed");

    // A configured logger: two sinks, failure eviction, structured metadata
    let memory = Arc::new(MemoryTransport::new());
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .timestamp_format(TimestampFormat::TimeMillis)
        .metadata(Metadata::new().with_field("service", "demo"))
        .transport(Arc::new(ConsoleTransport::new()))
        .transport(memory.clone())
        .failure_threshold(3)
        .on_transport_error(Arc::new(|failure| {
            eprintln!(
                "transport {} failed ({} in a row): {}",
                failure.transport, failure.consecutive_failures, failure.error
            );
        }))
        .build()?;

    logger.debug("Connecting to upstream");
    logger.warning_with(
        "Upstream responded slowly",
        Metadata::new().with_field("latency_ms", 870),
    );
    logger.error("Upstream request failed");

    // Child loggers extend configuration without touching the parent
    let request_logger = logger.with_metadata(Metadata::new().with_field("request_id", "abc-123"));
    request_logger.info("Handling request");
    request_logger.success("Request complete");

    println!("--- memory transport captured {} entries ---", memory.len());
    for line in memory.formatted_messages() {
        println!("{}", line);
    }

    logger.close()?;
    Ok(())
}
