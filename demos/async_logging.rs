//! Async logging example
//!
//! Demonstrates double-buffered async delivery with several producer
//! threads and an explicit shutdown that drains every queued record.
//!
//! Run with: cargo run --example async_logging

use rust_pattern_logger::info;
use rust_pattern_logger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - Async Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .name("async")
            .pattern("[%d][%t][%p] %m%n")
            .file_sink("./logfile/async.log")
            .async_mode(AsyncMode::Safe)
            .async_buffer_capacity(64 * 1024)
            .build()?,
    );

    println!("1. Logging from one thread:");
    for i in 0..100 {
        info!(logger, "Message #{}", i);
    }
    println!("   Logged 100 messages asynchronously");

    println!("\n2. Logging from four threads:");
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..1000 {
                    info!(logger, "thread {} message {}", t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }

    logger.shutdown()?;

    let metrics = logger.metrics();
    println!("\n3. Metrics:");
    println!("   logged:       {}", metrics.total_logged());
    println!("   dropped:      {}", metrics.dropped_count());
    println!("   drain cycles: {}", metrics.drain_cycles());
    println!("   bytes:        {}", metrics.bytes_drained());
    println!("   blocked:      {}", metrics.block_events());

    println!("\n=== Example completed successfully! ===");
    println!("Check ./logfile/async.log for output");
    Ok(())
}
