//! Logging macros for ergonomic log message formatting.
//!
//! Each macro captures `file!()` and `line!()` at the call site and passes
//! the message as `format_args!`, so nothing is formatted unless the level
//! gate admits the record.
//!
//! Two forms are accepted: with a logger expression first (anything that
//! derefs to [`Logger`](crate::Logger)), or with the format string first,
//! which logs to the global root logger.
//!
//! # Examples
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//! use rust_pattern_logger::{info, warning};
//!
//! let logger = Logger::builder().name("server").build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // To the root logger
//! warning!("disk usage at {}%", 91);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_pattern_logger::prelude::*;
/// # let logger = Logger::builder().name("doc").build().unwrap();
/// use rust_pattern_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(LogLevel::Warning, "root logger");
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($rest:tt)*) => {
        $crate::core::registry::root_logger().log(
            $level,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($fmt $($rest)*),
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Info, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_pattern_logger::prelude::*;
/// # let logger = Logger::builder().name("doc").build().unwrap();
/// use rust_pattern_logger::warning;
/// warning!(logger, "Retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warning {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Warning, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Error, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Logging at this level does not terminate
/// the process.
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Fatal, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
