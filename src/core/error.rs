//! Error types for the logger system

use super::formatter::PatternError;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A sink could not open its target file
    #[error("Sink cannot open '{path}': {message}")]
    SinkOpen {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Pattern compilation failure
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Declarative configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Template and arguments could not be expanded into a payload
    #[error("Format expansion failed: {0}")]
    FormatExpansion(String),

    /// Pipeline or registry already stopped
    #[error("Logger already stopped")]
    LoggerStopped,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sink open error
    pub fn sink_open(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a build-time configuration failure
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::Pattern(_)
                | LoggerError::SinkOpen { .. }
                | LoggerError::ConfigParse(_)
        )
    }
}
