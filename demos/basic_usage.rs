//! Basic logger usage example
//!
//! Demonstrates synchronous logging to stdout, the pattern language and
//! runtime level changes.
//!
//! Run with: cargo run --example basic_usage

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{debug, error, fatal, info, warning};

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - Basic Usage Example ===\n");

    // Default pattern: [%d{%H:%M:%S}][%t][%c][%f:%l][%p]%T%m%n
    let logger = Logger::builder().name("basic").build()?;

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message");

    println!("\n2. Logging with different minimum levels:");
    logger.set_min_level(LogLevel::Warning);
    println!("   Minimum level set to WARNING - debug and info won't show:");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    warning!(logger, "Warning message (visible)");

    println!("\n3. A custom pattern:");
    let custom = Logger::builder()
        .name("custom")
        .pattern("%d{%Y-%m-%d %H:%M:%S} %p %c (%f:%l) %m%n")
        .build()?;
    info!(custom, "user {} logged in from {}", "alice", "10.0.0.7");

    println!("\n4. The root logger:");
    info!("root logger writes with the default pattern");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
