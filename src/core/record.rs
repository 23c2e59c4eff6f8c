//! Log record structure

use super::log_level::LogLevel;
use std::cell::RefCell;
use std::sync::Arc;

// Thread-local cache so the thread identity is formatted once per thread
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<Arc<str>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn current_thread_id() -> Arc<str> {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        match cache.as_ref() {
            Some(id) => Arc::clone(id),
            None => {
                let id: Arc<str> = format!("{:?}", std::thread::current().id()).into();
                *cache = Some(Arc::clone(&id));
                id
            }
        }
    })
}

/// One log call, captured after the level gate passed.
///
/// Records are built once per call, rendered once by a
/// [`Pattern`](super::formatter::Pattern) and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    pub file: String,
    pub line: u32,
    pub logger_name: String,
    pub thread_id: Arc<str>,
    pub payload: String,
}

impl LogRecord {
    /// Build a record stamped with the calling thread's identity.
    pub fn new(
        level: LogLevel,
        timestamp: i64,
        file: impl Into<String>,
        line: u32,
        logger_name: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            level,
            timestamp,
            file: file.into(),
            line,
            logger_name: logger_name.into(),
            thread_id: current_thread_id(),
            payload: payload.into(),
        }
    }

    /// Replace the thread identity, used when replaying records in tests.
    pub fn with_thread_id(mut self, thread_id: impl Into<Arc<str>>) -> Self {
        self.thread_id = thread_id.into();
        self
    }
}

/// Escape line breaks and tabs so one payload cannot forge extra records.
pub(crate) fn sanitize_payload(payload: &str) -> String {
    payload
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_is_stable_per_thread() {
        let a = LogRecord::new(LogLevel::Info, 0, "a.rs", 1, "root", "x");
        let b = LogRecord::new(LogLevel::Info, 0, "a.rs", 2, "root", "y");
        assert_eq!(a.thread_id, b.thread_id);

        let other = std::thread::spawn(|| LogRecord::new(LogLevel::Info, 0, "a.rs", 3, "root", "z"))
            .join()
            .expect("thread panicked");
        assert_ne!(a.thread_id, other.thread_id);
    }

    #[test]
    fn test_sanitize_payload() {
        assert_eq!(
            sanitize_payload("login\nERROR fake\tentry\r"),
            "login\\nERROR fake\\tentry\\r"
        );
        assert_eq!(sanitize_payload("plain"), "plain");
    }
}
