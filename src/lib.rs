//! # Rust Pattern Logger
//!
//! A pattern-formatted logging library with synchronous and double-buffered
//! asynchronous delivery to stdout, file and rotating-file sinks.
//!
//! ## Features
//!
//! - **Pattern Formatting**: `%d{..} %t %c %f %l %m %T %n %p` compiled once per logger
//! - **Async Delivery**: Batched background writes with optional backpressure
//! - **Rotation**: Size- and time-based rolling files
//! - **Registry**: Named loggers with an always-present root logger
//!
//! ## Example
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//! use rust_pattern_logger::info;
//!
//! let logger = Logger::builder()
//!     .name("app")
//!     .min_level(LogLevel::Info)
//!     .pattern("[%p] %c: %m%n")
//!     .build()
//!     .unwrap();
//!
//! info!(logger, "started with {} workers", 4);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::registry::{get_logger, root_logger, shutdown};
    pub use crate::core::{
        AsyncMode, Clock, DeliveryMode, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerRegistry, Pattern, Result, Sink, SinkConfig,
    };
    pub use crate::sinks::{OutputSink, SharedSink, TimeGap};
}

pub use crate::core::registry::{get_logger, root_logger, shutdown};
pub use crate::core::{
    AsyncMode, AsyncPipeline, Buffer, Clock, DeliveryMode, FormatItem, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, ManualClock, Pattern,
    PatternError, Result, Sink, SinkConfig, SystemClock, DEFAULT_PATTERN, ROOT_LOGGER_NAME,
};
pub use crate::sinks::{
    FileSink, OutputSink, SharedSink, SizeRollSink, StdSink, TimeGap, TimeRollSink,
};
