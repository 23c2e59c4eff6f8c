//! Time-rotated file sink

use super::file::open_append;
use crate::core::util::local_time;
use crate::core::{Clock, LoggerError, Result, Sink, SystemClock};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Width of one rotation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeGap {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeGap {
    pub fn seconds(&self) -> i64 {
        match self {
            TimeGap::Second => 1,
            TimeGap::Minute => 60,
            TimeGap::Hour => 3600,
            TimeGap::Day => 86400,
        }
    }

    /// Bucket that `now` falls into
    pub fn bucket(&self, now: i64) -> i64 {
        match self.seconds() {
            1 => now,
            gap => now.div_euclid(gap),
        }
    }
}

/// Writes into one file per time bucket.
///
/// The first file is opened at construction. A write whose time falls into
/// a different bucket than the held one opens a new file named
/// `basename + YYYYmmddHHMMSS + ".log"` from the current wall-clock time.
///
/// # Examples
///
/// ```no_run
/// use rust_pattern_logger::sinks::{TimeGap, TimeRollSink};
///
/// let sink = TimeRollSink::new("./timeroll/time-", TimeGap::Hour).unwrap();
/// ```
pub struct TimeRollSink {
    basename: String,
    gap: TimeGap,
    current_bucket: i64,
    file: File,
    current_path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl TimeRollSink {
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the initial file cannot be
    /// opened.
    pub fn new(basename: impl Into<String>, gap: TimeGap) -> Result<Self> {
        Self::with_clock(basename, gap, Arc::new(SystemClock))
    }

    /// Like [`new`](Self::new), bucketing and naming files from `clock`
    pub fn with_clock(
        basename: impl Into<String>,
        gap: TimeGap,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let basename = basename.into();
        let now = clock.now();
        let current_path = file_name(&basename, now);
        let file = open_append(&current_path)?;

        Ok(Self {
            basename,
            gap,
            current_bucket: gap.bucket(now),
            file,
            current_path,
            clock,
        })
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn gap(&self) -> TimeGap {
        self.gap
    }

    pub fn current_bucket(&self) -> i64 {
        self.current_bucket
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }
}

fn file_name(basename: &str, now: i64) -> PathBuf {
    PathBuf::from(format!(
        "{}{}.log",
        basename,
        local_time(now).format("%Y%m%d%H%M%S")
    ))
}

impl Sink for TimeRollSink {
    fn log(&mut self, data: &[u8]) -> Result<()> {
        let now = self.clock.now();
        let bucket = self.gap.bucket(now);
        if bucket != self.current_bucket {
            let path = file_name(&self.basename, now);
            match open_append(&path) {
                Ok(file) => {
                    self.file = file;
                    self.current_path = path;
                    self.current_bucket = bucket;
                }
                // keep the held bucket so the next write retries
                Err(e) => eprintln!(
                    "[LOGGER WARNING] Rotation of '{}' failed, continuing in '{}': {}",
                    self.basename,
                    self.current_path.display(),
                    e
                ),
            }
        }

        self.file.write_all(data).map_err(|e| {
            LoggerError::io_operation(
                "writing rolling log file",
                self.current_path.display().to_string(),
                e,
            )
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "time_roll"
    }
}
