//! Named logger registry
//!
//! The registry owns a root logger from the moment it exists: a synchronous
//! stdout logger with the default pattern, registered under
//! [`ROOT_LOGGER_NAME`].

use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

pub const ROOT_LOGGER_NAME: &str = "root";

pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    root: RwLock<Arc<Logger>>,
    stopped: AtomicBool,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        let root = Arc::new(Logger::with_defaults(ROOT_LOGGER_NAME));
        let mut loggers = HashMap::new();
        loggers.insert(ROOT_LOGGER_NAME.to_string(), Arc::clone(&root));

        Self {
            loggers: Mutex::new(loggers),
            root: RwLock::new(root),
            stopped: AtomicBool::new(false),
        }
    }

    /// Process-wide registry, created on first use
    pub fn global() -> &'static LoggerRegistry {
        static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    /// Register `logger` under its name, replacing any previous entry.
    /// A logger named [`ROOT_LOGGER_NAME`] becomes the new root.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::LoggerStopped`] once the registry has been
    /// shut down.
    pub fn add_logger(&self, logger: Arc<Logger>) -> Result<()> {
        let mut loggers = self.loggers.lock();
        // checked under the map lock so a concurrent shutdown cannot miss it
        if self.stopped.load(Ordering::Acquire) {
            return Err(LoggerError::LoggerStopped);
        }
        if logger.name() == ROOT_LOGGER_NAME {
            *self.root.write() = Arc::clone(&logger);
        }
        loggers.insert(logger.name().to_string(), logger);
        Ok(())
    }

    /// Logger registered under `name`, if any
    pub fn get_logger(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().get(name).cloned()
    }

    /// The root logger; resolvable for the registry's whole lifetime,
    /// including after [`shutdown`](Self::shutdown)
    pub fn root_logger(&self) -> Arc<Logger> {
        Arc::clone(&self.root.read())
    }

    pub fn has_logger(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Names of all registered loggers, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Unregister `name`; the removed logger keeps working for holders of
    /// it. The root logger cannot be removed.
    pub fn remove_logger(&self, name: &str) -> Option<Arc<Logger>> {
        if name == ROOT_LOGGER_NAME {
            return None;
        }
        self.loggers.lock().remove(name)
    }

    /// Shut down every registered logger, draining async pipelines, and
    /// clear the registry.
    ///
    /// Returns `true` on the first call and `false` afterwards. Loggers can
    /// no longer be added once this has run.
    pub fn shutdown(&self) -> bool {
        let loggers: Vec<Arc<Logger>> = {
            let mut map = self.loggers.lock();
            if self.stopped.swap(true, Ordering::AcqRel) {
                return false;
            }
            map.drain().map(|(_, l)| l).collect()
        };
        for logger in loggers.iter() {
            if let Err(e) = logger.shutdown() {
                eprintln!(
                    "[LOGGER ERROR] Failed to shut down logger '{}': {}",
                    logger.name(),
                    e
                );
            }
        }
        true
    }

    pub fn is_shut_down(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a logger in the global registry
pub fn get_logger(name: &str) -> Option<Arc<Logger>> {
    LoggerRegistry::global().get_logger(name)
}

pub fn root_logger() -> Arc<Logger> {
    LoggerRegistry::global().root_logger()
}

/// Shut down the global registry. Call before process exit so queued
/// records reach their sinks.
pub fn shutdown() -> bool {
    LoggerRegistry::global().shutdown()
}
