//! Core logger types and traits

pub mod buffer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod sink;
pub mod util;

pub use buffer::Buffer;
pub use config::{LoggerConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use formatter::{FormatItem, Pattern, PatternError, DEFAULT_PATTERN};
pub use log_level::LogLevel;
pub use logger::{DeliveryMode, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use pipeline::{AsyncMode, AsyncPipeline};
pub use record::LogRecord;
pub use registry::{LoggerRegistry, ROOT_LOGGER_NAME};
pub use sink::Sink;
pub use util::{Clock, ManualClock, SystemClock};
