//! Double-buffered asynchronous delivery
//!
//! Producers append into a shared producer [`Buffer`]; one background
//! thread swaps it with its private consumer buffer and hands the swapped
//! bytes to a drain callback outside the lock. Slow sink I/O therefore
//! never holds up producers, and the callback only ever runs on that one
//! thread.

use super::buffer::Buffer;
use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};

/// Backpressure behaviour of [`AsyncPipeline::push`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsyncMode {
    /// Block producers until the producer buffer has room (bounded memory)
    #[default]
    Safe,
    /// Always append, growing the producer buffer without bound
    Unsafe,
}

struct State {
    producer: Buffer,
    /// The worker holds swapped-out bytes it has not finished draining
    draining: bool,
    stop: bool,
}

struct Shared {
    state: Mutex<State>,
    /// Signalled when the producer buffer has been emptied by a swap
    producer_ready: Condvar,
    /// Signalled when data was pushed or a stop was requested
    consumer_ready: Condvar,
    mode: AsyncMode,
    metrics: Arc<LoggerMetrics>,
}

impl Shared {
    /// Whether `len` bytes may be appended now in safe mode.
    ///
    /// A payload larger than the whole buffer waits until the producer
    /// buffer is empty and no drain is in flight, then goes into the
    /// producer buffer (which grows) so it can never wait forever.
    fn admits(state: &State, len: usize) -> bool {
        state.producer.writable_size() >= len || (state.producer.is_empty() && !state.draining)
    }
}

/// Background single-consumer pipeline.
///
/// # Example
///
/// ```
/// use rust_pattern_logger::core::{AsyncMode, AsyncPipeline};
/// use std::sync::{Arc, Mutex};
///
/// let collected = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&collected);
/// let pipeline = AsyncPipeline::new(AsyncMode::Safe, 1024, move |bytes: &[u8]| {
///     sink.lock().unwrap().extend_from_slice(bytes);
/// })
/// .unwrap();
///
/// pipeline.push(b"hello ").unwrap();
/// pipeline.push(b"world").unwrap();
/// pipeline.stop();
///
/// assert_eq!(&*collected.lock().unwrap(), b"hello world");
/// ```
pub struct AsyncPipeline {
    shared: Arc<Shared>,
    worker: Mutex<Option<JoinHandle<()>>>,
    worker_id: ThreadId,
}

impl AsyncPipeline {
    /// Start a pipeline with fresh metrics and a generic thread name
    pub fn new<F>(mode: AsyncMode, capacity: usize, drain: F) -> Result<Self>
    where
        F: FnMut(&[u8]) + Send + 'static,
    {
        Self::spawn("async-pipeline", mode, capacity, Arc::new(LoggerMetrics::new()), drain)
    }

    /// Start a pipeline whose buffers each begin with `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the background thread cannot be spawned.
    pub fn spawn<F>(
        name: &str,
        mode: AsyncMode,
        capacity: usize,
        metrics: Arc<LoggerMetrics>,
        drain: F,
    ) -> Result<Self>
    where
        F: FnMut(&[u8]) + Send + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                producer: Buffer::with_capacity(capacity),
                draining: false,
                stop: false,
            }),
            producer_ready: Condvar::new(),
            consumer_ready: Condvar::new(),
            mode,
            metrics,
        });

        let worker_shared = Arc::clone(&shared);
        let consumer = Buffer::with_capacity(capacity);
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || Self::run(worker_shared, consumer, drain))
            .map_err(|e| {
                LoggerError::io_operation(
                    "spawning pipeline thread",
                    format!("Failed to start '{}'", name),
                    e,
                )
            })?;
        let worker_id = handle.thread().id();

        Ok(Self {
            shared,
            worker: Mutex::new(Some(handle)),
            worker_id,
        })
    }

    /// Append `data` for the background thread.
    ///
    /// In [`AsyncMode::Safe`] this blocks while the producer buffer lacks
    /// room; in [`AsyncMode::Unsafe`] it never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::LoggerStopped`] once [`stop`](Self::stop) has
    /// been requested, since nothing would drain the data any more.
    pub fn push(&self, data: &[u8]) -> Result<()> {
        let mut state = self.shared.state.lock();
        if state.stop {
            return Err(LoggerError::LoggerStopped);
        }

        if self.shared.mode == AsyncMode::Safe && !Shared::admits(&state, data.len()) {
            self.shared.metrics.record_block();
            while !state.stop && !Shared::admits(&state, data.len()) {
                self.shared.producer_ready.wait(&mut state);
            }
            if state.stop {
                return Err(LoggerError::LoggerStopped);
            }
        }

        state.producer.push(data);
        drop(state);
        self.shared.consumer_ready.notify_one();
        Ok(())
    }

    /// Request shutdown and wait for the background thread.
    ///
    /// Everything pushed before this call is drained before the thread
    /// exits. Safe to call more than once and from several threads; every
    /// caller returns only after the thread has finished. Called from inside
    /// the drain callback it only requests the stop.
    pub fn stop(&self) {
        self.shared.state.lock().stop = true;
        self.shared.consumer_ready.notify_all();
        self.shared.producer_ready.notify_all();

        if thread::current().id() == self.worker_id {
            return;
        }

        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] Pipeline thread panicked during shutdown: {}",
                    panic_message(e.as_ref())
                );
            }
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.shared.state.lock().stop
    }

    pub fn mode(&self) -> AsyncMode {
        self.shared.mode
    }

    pub fn metrics(&self) -> &Arc<LoggerMetrics> {
        &self.shared.metrics
    }

    fn run<F>(shared: Arc<Shared>, mut consumer: Buffer, mut drain: F)
    where
        F: FnMut(&[u8]),
    {
        loop {
            {
                let mut state = shared.state.lock();
                while !state.stop && state.producer.is_empty() {
                    shared.consumer_ready.wait(&mut state);
                }
                if state.producer.is_empty() {
                    // stop requested and nothing left to drain
                    break;
                }
                state.producer.swap(&mut consumer);
                state.draining = true;
            }

            if shared.mode == AsyncMode::Safe {
                shared.producer_ready.notify_all();
            }

            let bytes = consumer.readable_size();
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                drain(consumer.readable())
            }));
            if let Err(panic_info) = result {
                eprintln!(
                    "[LOGGER CRITICAL] Drain callback panicked: {}. {} bytes were lost.",
                    panic_message(panic_info.as_ref()),
                    bytes
                );
            }
            shared.metrics.record_drain(bytes);
            consumer.reset();

            shared.state.lock().draining = false;
            if shared.mode == AsyncMode::Safe {
                shared.producer_ready.notify_all();
            }
        }
    }
}

impl Drop for AsyncPipeline {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Extract a readable message from a caught panic payload
pub(crate) fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
