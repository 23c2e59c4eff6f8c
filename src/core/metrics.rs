//! Per-logger delivery counters
//!
//! One [`LoggerMetrics`] is shared by a logger and, in async mode, its
//! pipeline thread. All counters are relaxed atomics: each is exact on its
//! own, but a reader may observe two of them at slightly different moments.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a single logger.
///
/// # Example
///
/// ```
/// use rust_pattern_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_logged();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.total_logged(), 2);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    logged: AtomicU64,
    /// Lost to a failed message expansion or a stopped pipeline
    dropped: AtomicU64,
    write_failures: AtomicU64,
    /// Safe-mode pushes that had to wait for room
    blocks: AtomicU64,
    drain_cycles: AtomicU64,
    drained_bytes: AtomicU64,
}

fn bump(counter: &AtomicU64, by: u64) -> u64 {
    counter.fetch_add(by, Ordering::Relaxed)
}

fn read(counter: &AtomicU64) -> u64 {
    counter.load(Ordering::Relaxed)
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            logged: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            blocks: AtomicU64::new(0),
            drain_cycles: AtomicU64::new(0),
            drained_bytes: AtomicU64::new(0),
        }
    }

    /// Records accepted for delivery
    pub fn total_logged(&self) -> u64 {
        read(&self.logged)
    }

    pub fn dropped_count(&self) -> u64 {
        read(&self.dropped)
    }

    /// Sink writes that returned an error or panicked, counted per sink
    pub fn write_failures(&self) -> u64 {
        read(&self.write_failures)
    }

    pub fn block_events(&self) -> u64 {
        read(&self.blocks)
    }

    pub fn drain_cycles(&self) -> u64 {
        read(&self.drain_cycles)
    }

    pub fn bytes_drained(&self) -> u64 {
        read(&self.drained_bytes)
    }

    pub fn record_logged(&self) {
        bump(&self.logged, 1);
    }

    /// Count one lost record; returns the count before this one so callers
    /// can alert on thresholds without a second load
    pub fn record_dropped(&self) -> u64 {
        bump(&self.dropped, 1)
    }

    pub fn record_write_failure(&self) {
        bump(&self.write_failures, 1);
    }

    pub fn record_block(&self) {
        bump(&self.blocks, 1);
    }

    /// One pipeline swap that handed `bytes` to the sinks
    pub fn record_drain(&self, bytes: usize) {
        bump(&self.drain_cycles, 1);
        bump(&self.drained_bytes, bytes as u64);
    }

    /// Share of records lost, in percent of everything offered
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count();
        let offered = self.total_logged() + dropped;
        if offered == 0 {
            return 0.0;
        }
        dropped as f64 * 100.0 / offered as f64
    }

    fn counters(&self) -> [&AtomicU64; 6] {
        [
            &self.logged,
            &self.dropped,
            &self.write_failures,
            &self.blocks,
            &self.drain_cycles,
            &self.drained_bytes,
        ]
    }

    pub fn reset(&self) {
        for counter in self.counters() {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Cloning takes a detached snapshot; later updates to either side are
/// not seen by the other.
impl Clone for LoggerMetrics {
    fn clone(&self) -> Self {
        let [logged, dropped, write_failures, blocks, drain_cycles, drained_bytes] =
            self.counters().map(|counter| AtomicU64::new(read(counter)));
        Self {
            logged,
            dropped,
            write_failures,
            blocks,
            drain_cycles,
            drained_bytes,
        }
    }
}
