//! File logging example
//!
//! Demonstrates a plain file sink alongside size- and time-rotated files,
//! configured both with the builder and from JSON.
//!
//! Run with: cargo run --example file_logging

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - File Logging Example ===\n");

    println!("1. Logging to stdout, a file and rolling files:");
    let logger = Logger::builder()
        .name("files")
        .min_level(LogLevel::Info)
        .std_sink()
        .file_sink("./logfile/application.log")
        .size_roll_sink("./rollfile/roll-", 4 * 1024)
        .time_roll_sink("./timeroll/time-", TimeGap::Minute)
        .build_global()?;

    for i in 0..200 {
        info!(logger, "processing batch {} of 200", i + 1);
    }
    warning!(logger, "all batches processed");

    println!("\n2. A logger described in JSON:");
    let config = LoggerConfig::from_json(
        r#"{
            "name": "audit",
            "level": "WARN",
            "pattern": "%d{%Y-%m-%dT%H:%M:%S} %p %m%n",
            "sinks": [{ "type": "file", "path": "./logfile/audit.log" }]
        }"#,
    )?;
    let audit = config.into_builder().build_global()?;
    info!(audit, "not written, below WARN");
    warning!(audit, "permission change on /etc/app.toml");

    if let Some(found) = get_logger("audit") {
        println!("   registry resolved '{}' at level {}", found.name(), found.min_level());
    }

    // Flush and stop every registered logger before exit
    shutdown();

    println!("\n=== Example completed successfully! ===");
    println!("Check ./logfile, ./rollfile and ./timeroll for output");
    Ok(())
}
