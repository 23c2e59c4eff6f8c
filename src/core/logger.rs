//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    formatter::{Pattern, DEFAULT_PATTERN},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    pipeline::{panic_message, AsyncMode, AsyncPipeline},
    record::{sanitize_payload, LogRecord},
    registry::LoggerRegistry,
    sink::Sink,
    util::{Clock, SystemClock},
};
use crate::core::buffer::BUFFER_DEFAULT_SIZE;
use crate::sinks::{OutputSink, SharedSink, SizeRollSink, TimeGap, TimeRollSink};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// How rendered records reach the sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Written on the caller's thread under the logger's mutex
    #[default]
    Sync,
    /// Pushed to a background pipeline; producers block when it is full
    AsyncSafe,
    /// Pushed to a background pipeline that grows without bound
    AsyncUnsafe,
}

impl DeliveryMode {
    pub fn async_mode(&self) -> Option<AsyncMode> {
        match self {
            DeliveryMode::Sync => None,
            DeliveryMode::AsyncSafe => Some(AsyncMode::Safe),
            DeliveryMode::AsyncUnsafe => Some(AsyncMode::Unsafe),
        }
    }
}

enum Delivery {
    Sync(Mutex<()>),
    Async(AsyncPipeline),
}

pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    formatter: Arc<Pattern>,
    sinks: Arc<Vec<SharedSink>>,
    clock: Arc<dyn Clock>,
    sanitize: bool,
    /// Metrics for observability (dropped count, total logged, etc.)
    metrics: Arc<LoggerMetrics>,
    mode: DeliveryMode,
    delivery: Delivery,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_pattern_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("app")
    ///     .min_level(LogLevel::Info)
    ///     .pattern("[%p] %m%n")
    ///     .delivery(DeliveryMode::AsyncSafe)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.name(), "app");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Synchronous logger with the default pattern writing to stdout
    pub(crate) fn with_defaults(name: &str) -> Self {
        Self {
            name: name.to_string(),
            min_level: RwLock::new(LogLevel::default()),
            formatter: Arc::new(Pattern::default()),
            sinks: Arc::new(vec![OutputSink::std().shared()]),
            clock: Arc::new(SystemClock),
            sanitize: false,
            metrics: Arc::new(LoggerMetrics::new()),
            mode: DeliveryMode::Sync,
            delivery: Delivery::Sync(Mutex::new(())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Whether a call at `level` passes the level gate
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        *self.min_level.read() <= level
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn formatter(&self) -> &Arc<Pattern> {
        &self.formatter
    }

    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Records lost before reaching delivery
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Log one record.
    ///
    /// The level gate runs before `args` is expanded, so a suppressed call
    /// never pays for formatting. Nothing here returns an error or panics
    /// into the caller; failures are reported on stderr and counted.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }

        let payload = match args.as_str() {
            Some(text) => text.to_string(),
            None => {
                let mut payload = String::new();
                if payload.write_fmt(args).is_err() {
                    self.metrics.record_dropped();
                    eprintln!(
                        "[LOGGER ERROR] Logger '{}': {}",
                        self.name,
                        LoggerError::FormatExpansion(format!(
                            "record at {}:{} dropped",
                            file, line
                        ))
                    );
                    return;
                }
                payload
            }
        };
        let payload = if self.sanitize {
            sanitize_payload(&payload)
        } else {
            payload
        };

        let record = LogRecord::new(level, self.clock.now(), file, line, self.name.as_str(), payload);
        let bytes = self.formatter.render(&record);
        self.dispatch(&bytes);
    }

    #[inline]
    pub fn debug(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, file, line, args);
    }

    #[inline]
    pub fn info(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, file, line, args);
    }

    #[inline]
    pub fn warning(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, file, line, args);
    }

    #[inline]
    pub fn error(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, file, line, args);
    }

    #[inline]
    pub fn fatal(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, file, line, args);
    }

    fn dispatch(&self, bytes: &[u8]) {
        match &self.delivery {
            Delivery::Sync(lock) => {
                let _guard = lock.lock();
                Self::write_to_sinks(&self.sinks, bytes, &self.metrics);
                self.metrics.record_logged();
            }
            Delivery::Async(pipeline) => match pipeline.push(bytes) {
                Ok(()) => {
                    self.metrics.record_logged();
                }
                Err(e) => {
                    let dropped = self.metrics.record_dropped();
                    // Alert on first drop and periodically thereafter
                    if dropped == 0 || (dropped + 1) % 1000 == 0 {
                        eprintln!(
                            "[LOGGER WARNING] Logger '{}': {}, {} logs dropped",
                            self.name,
                            e,
                            dropped + 1
                        );
                    }
                }
            },
        }
    }

    /// Write `bytes` to every sink in order.
    ///
    /// **Per-sink panic isolation**: each sink call is wrapped in
    /// `catch_unwind`, so one failing sink never keeps the others from
    /// receiving the bytes.
    fn write_to_sinks(sinks: &[SharedSink], bytes: &[u8], metrics: &LoggerMetrics) {
        for (idx, sink) in sinks.iter().enumerate() {
            let mut sink = sink.lock();
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.log(bytes)));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    metrics.record_write_failure();
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                }
                Err(panic_info) => {
                    metrics.record_write_failure();
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }

    /// Flush every sink.
    ///
    /// For async loggers this does not wait for queued records; use
    /// [`shutdown`](Self::shutdown) for that.
    pub fn flush(&self) -> Result<()> {
        for sink in self.sinks.iter() {
            sink.lock().flush()?;
        }
        Ok(())
    }

    /// Stop the pipeline (draining every queued record) and flush sinks.
    ///
    /// Async loggers reject records logged after this call. Calling it more
    /// than once is harmless.
    pub fn shutdown(&self) -> Result<()> {
        if let Delivery::Async(pipeline) = &self.delivery {
            pipeline.stop();
        }
        self.flush()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("pattern", &self.formatter.as_str())
            .field("sinks", &self.sinks.len())
            .field("mode", &self.mode)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        // Report any dropped logs
        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} dropped logs (drop rate: {:.2}%)",
                self.name,
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

enum SinkSpec {
    Ready(SharedSink),
    Std,
    File(PathBuf),
    SizeRoll { basename: String, max_size: u64 },
    TimeRoll { basename: String, gap: TimeGap },
}

impl SinkSpec {
    fn open(self, clock: &Arc<dyn Clock>) -> Result<SharedSink> {
        let sink = match self {
            SinkSpec::Ready(shared) => return Ok(shared),
            SinkSpec::Std => OutputSink::std(),
            SinkSpec::File(path) => OutputSink::file(path)?,
            SinkSpec::SizeRoll { basename, max_size } => {
                SizeRollSink::with_clock(basename, max_size, Arc::clone(clock))?.into()
            }
            SinkSpec::TimeRoll { basename, gap } => {
                TimeRollSink::with_clock(basename, gap, Arc::clone(clock))?.into()
            }
        };
        Ok(sink.shared())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Sinks given by path are opened in [`build`](Self::build), so every
/// configuration problem surfaces there, before any logger exists. With no
/// sinks configured the logger writes to standard output.
///
/// # Example
/// ```no_run
/// use rust_pattern_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("service")
///     .min_level(LogLevel::Warning)
///     .pattern("%d{%Y-%m-%d %H:%M:%S} [%p] %c: %m%n")
///     .file_sink("./logfile/service.log")
///     .size_roll_sink("./rollfile/service-", 64 * 1024 * 1024)
///     .async_mode(AsyncMode::Safe)
///     .build()
///     .expect("invalid logger configuration");
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    pattern: String,
    sinks: Vec<SinkSpec>,
    mode: DeliveryMode,
    buffer_capacity: usize,
    clock: Arc<dyn Clock>,
    sanitize: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: String::new(),
            min_level: LogLevel::default(),
            pattern: DEFAULT_PATTERN.to_string(),
            sinks: Vec::new(),
            mode: DeliveryMode::Sync,
            buffer_capacity: BUFFER_DEFAULT_SIZE,
            clock: Arc::new(SystemClock),
            sanitize: false,
        }
    }

    /// Set the logger name (required, used as the registry key)
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the output pattern, compiled in [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Add an already constructed sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Into<OutputSink>) -> Self {
        self.sinks.push(SinkSpec::Ready(sink.into().shared()));
        self
    }

    /// Add a sink that may also be attached to other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(SinkSpec::Ready(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn std_sink(mut self) -> Self {
        self.sinks.push(SinkSpec::Std);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_sink(mut self, path: impl Into<PathBuf>) -> Self {
        self.sinks.push(SinkSpec::File(path.into()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn size_roll_sink(mut self, basename: impl Into<String>, max_size: u64) -> Self {
        self.sinks.push(SinkSpec::SizeRoll {
            basename: basename.into(),
            max_size,
        });
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_roll_sink(mut self, basename: impl Into<String>, gap: TimeGap) -> Self {
        self.sinks.push(SinkSpec::TimeRoll {
            basename: basename.into(),
            gap,
        });
        self
    }

    /// Choose sync or async delivery. Default is [`DeliveryMode::Sync`].
    #[must_use = "builder methods return a new value"]
    pub fn delivery(mut self, mode: DeliveryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable async delivery with the given backpressure behaviour
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(self, mode: AsyncMode) -> Self {
        self.delivery(match mode {
            AsyncMode::Safe => DeliveryMode::AsyncSafe,
            AsyncMode::Unsafe => DeliveryMode::AsyncUnsafe,
        })
    }

    /// Initial size in bytes of each pipeline buffer (async only)
    #[must_use = "builder methods return a new value"]
    pub fn async_buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    /// Clock for record timestamps and for rotating sinks declared by path
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Escape `\n`, `\r` and `\t` in payloads to prevent log injection
    #[must_use = "builder methods return a new value"]
    pub fn sanitize_payload(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    /// Validate the configuration and build the Logger
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name is empty, the pattern does
    /// not compile, a sink cannot open its target or the pipeline thread
    /// cannot be started.
    pub fn build(self) -> Result<Logger> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config("LoggerBuilder", "logger name must not be empty"));
        }

        let formatter = Arc::new(Pattern::compile(&self.pattern)?);

        let specs = if self.sinks.is_empty() {
            vec![SinkSpec::Std]
        } else {
            self.sinks
        };
        let sinks = Arc::new(
            specs
                .into_iter()
                .map(|spec| spec.open(&self.clock))
                .collect::<Result<Vec<_>>>()?,
        );

        let metrics = Arc::new(LoggerMetrics::new());
        let delivery = match self.mode.async_mode() {
            None => Delivery::Sync(Mutex::new(())),
            Some(async_mode) => {
                let drain_sinks = Arc::clone(&sinks);
                let drain_metrics = Arc::clone(&metrics);
                let pipeline = AsyncPipeline::spawn(
                    &format!("{}-pipeline", self.name),
                    async_mode,
                    self.buffer_capacity,
                    Arc::clone(&metrics),
                    move |bytes: &[u8]| {
                        Logger::write_to_sinks(&drain_sinks, bytes, &drain_metrics);
                        for sink in drain_sinks.iter() {
                            let _ = sink.lock().flush();
                        }
                    },
                )?;
                Delivery::Async(pipeline)
            }
        };

        Ok(Logger {
            name: self.name,
            min_level: RwLock::new(self.min_level),
            formatter,
            sinks,
            clock: self.clock,
            sanitize: self.sanitize,
            metrics,
            mode: self.mode,
            delivery,
        })
    }

    /// Build the logger and register it with `registry`
    pub fn build_and_register(self, registry: &LoggerRegistry) -> Result<Arc<Logger>> {
        let logger = Arc::new(self.build()?);
        registry.add_logger(Arc::clone(&logger))?;
        Ok(logger)
    }

    /// Build the logger and register it with the process-wide registry
    pub fn build_global(self) -> Result<Arc<Logger>> {
        self.build_and_register(LoggerRegistry::global())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::ManualClock;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct CountingDisplay<'a>(&'a AtomicUsize);

    impl fmt::Display for CountingDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn file_logger(dir: &TempDir, mode: DeliveryMode, pattern: &str) -> (Logger, PathBuf) {
        let path = dir.path().join("test.log");
        let logger = Logger::builder()
            .name("test")
            .pattern(pattern)
            .min_level(LogLevel::Info)
            .file_sink(&path)
            .delivery(mode)
            .build()
            .expect("Failed to build logger");
        (logger, path)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().name("defaults").build().unwrap();

        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert_eq!(logger.formatter().as_str(), DEFAULT_PATTERN);
        assert_eq!(logger.mode(), DeliveryMode::Sync);
        assert_eq!(logger.sinks().len(), 1);
        assert_eq!(logger.sinks()[0].lock().name(), "std");
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let err = Logger::builder().build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("   ").build().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_builder_rejects_bad_pattern() {
        let err = Logger::builder().name("bad").pattern("%m%").build().unwrap_err();
        assert!(matches!(err, LoggerError::Pattern(_)));

        let err = Logger::builder().name("bad").pattern("%d{%H").build().unwrap_err();
        assert!(matches!(err, LoggerError::Pattern(_)));
    }

    #[test]
    fn test_builder_rejects_unopenable_sink() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = Logger::builder()
            .name("bad")
            .file_sink(temp_dir.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, LoggerError::SinkOpen { .. }));
    }

    #[test]
    fn test_sync_level_gate_and_exact_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::Sync, "%m%n");

        logger.debug(file!(), line!(), format_args!("x"));
        logger.info(file!(), line!(), format_args!("hello"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_level_gate_skips_formatting() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::Sync, "%m%n");
        let calls = AtomicUsize::new(0);

        logger.debug(file!(), line!(), format_args!("{}", CountingDisplay(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.warning(file!(), line!(), format_args!("{}", CountingDisplay(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "counted\n");
    }

    #[test]
    fn test_expansion_failure_drops_record() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::Sync, "%m%n");

        logger.error(file!(), line!(), format_args!("{}", FailingDisplay));
        logger.error(file!(), line!(), format_args!("still logging"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "still logging\n");
        assert_eq!(logger.dropped_count(), 1);
    }

    #[test]
    fn test_record_fields_reach_pattern() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fields.log");
        let logger = Logger::builder()
            .name("fields")
            .pattern("%c|%f|%l|%p|%m%n")
            .file_sink(&path)
            .clock(Arc::new(ManualClock::new(1_700_000_000)))
            .build()
            .unwrap();

        logger.fatal("src/main.rs", 12, format_args!("code {}", 7));

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "fields|src/main.rs|12|FATAL|code 7\n"
        );
    }

    #[test]
    fn test_set_min_level_at_runtime() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::Sync, "%m%n");

        logger.set_min_level(LogLevel::Off);
        logger.fatal(file!(), line!(), format_args!("suppressed"));
        logger.set_min_level(LogLevel::Unknown);
        logger.debug(file!(), line!(), format_args!("admitted"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "admitted\n");
    }

    #[test]
    fn test_sanitize_payload() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sanitized.log");
        let logger = Logger::builder()
            .name("sanitized")
            .pattern("%m%n")
            .file_sink(&path)
            .sanitize_payload(true)
            .build()
            .unwrap();

        logger.info(file!(), line!(), format_args!("User login\nERROR fake entry"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "User login\\nERROR fake entry\n");
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_async_shutdown_delivers_everything() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::AsyncSafe, "%m%n");

        for i in 0..500 {
            logger.info(file!(), line!(), format_args!("Message {}", i));
        }
        logger.shutdown().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 500);
        assert_eq!(lines[0], "Message 0");
        assert_eq!(lines[499], "Message 499");
        assert_eq!(logger.metrics().bytes_drained(), content.len() as u64);
    }

    #[test]
    fn test_async_rejects_after_shutdown() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (logger, path) = file_logger(&temp_dir, DeliveryMode::AsyncUnsafe, "%m%n");

        logger.info(file!(), line!(), format_args!("before"));
        logger.shutdown().unwrap();
        logger.info(file!(), line!(), format_args!("after"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "before\n");
        assert_eq!(logger.dropped_count(), 1);
    }

    #[test]
    fn test_shared_sink_across_loggers() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let shared = OutputSink::file(temp_dir.path().join("shared.log")).unwrap().shared();

        let a = Logger::builder()
            .name("a")
            .pattern("%c:%m%n")
            .shared_sink(Arc::clone(&shared))
            .build()
            .unwrap();
        let b = Logger::builder()
            .name("b")
            .pattern("%c:%m%n")
            .shared_sink(Arc::clone(&shared))
            .build()
            .unwrap();

        a.info(file!(), line!(), format_args!("one"));
        b.info(file!(), line!(), format_args!("two"));

        let content = fs::read_to_string(temp_dir.path().join("shared.log")).unwrap();
        assert_eq!(content, "a:one\nb:two\n");
    }

    #[test]
    fn test_delivery_mode_serde() {
        let mode: DeliveryMode = serde_json::from_str("\"async_unsafe\"").unwrap();
        assert_eq!(mode, DeliveryMode::AsyncUnsafe);
        assert_eq!(mode.async_mode(), Some(AsyncMode::Unsafe));
        assert_eq!(DeliveryMode::Sync.async_mode(), None);
    }
}
