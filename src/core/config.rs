//! Declarative logger configuration
//!
//! [`LoggerConfig`] mirrors [`LoggerBuilder`] as plain data so loggers can be
//! described in JSON:
//!
//! ```
//! use rust_pattern_logger::core::config::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "name": "service",
//!     "level": "WARN",
//!     "pattern": "[%p] %m%n",
//!     "mode": "async_safe",
//!     "sinks": [{ "type": "std" }]
//! }"#).unwrap();
//! assert_eq!(config.name, "service");
//! ```

use super::buffer::BUFFER_DEFAULT_SIZE;
use super::error::Result;
use super::formatter::DEFAULT_PATTERN;
use super::log_level::LogLevel;
use super::logger::{DeliveryMode, Logger, LoggerBuilder};
use crate::sinks::TimeGap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub mode: DeliveryMode,
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    #[serde(default)]
    pub sanitize_payload: bool,
    /// Empty means a single stdout sink
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SinkConfig {
    Std,
    File { path: PathBuf },
    SizeRoll { basename: String, max_size: u64 },
    TimeRoll { basename: String, gap: TimeGap },
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_buffer_capacity() -> usize {
    BUFFER_DEFAULT_SIZE
}

impl LoggerConfig {
    /// Configuration with every option at its default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::default(),
            pattern: default_pattern(),
            mode: DeliveryMode::default(),
            buffer_capacity: default_buffer_capacity(),
            sanitize_payload: false,
            sinks: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// Returns [`LoggerError::ConfigParse`](super::error::LoggerError::ConfigParse)
    /// for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_builder(self) -> LoggerBuilder {
        let builder = Logger::builder()
            .name(self.name)
            .min_level(self.level)
            .pattern(self.pattern)
            .delivery(self.mode)
            .async_buffer_capacity(self.buffer_capacity)
            .sanitize_payload(self.sanitize_payload);

        self.sinks
            .into_iter()
            .fold(builder, |builder, sink| match sink {
                SinkConfig::Std => builder.std_sink(),
                SinkConfig::File { path } => builder.file_sink(path),
                SinkConfig::SizeRoll { basename, max_size } => {
                    builder.size_roll_sink(basename, max_size)
                }
                SinkConfig::TimeRoll { basename, gap } => builder.time_roll_sink(basename, gap),
            })
    }

    /// Shorthand for `into_builder().build()`
    pub fn build(self) -> Result<Logger> {
        self.into_builder().build()
    }
}
