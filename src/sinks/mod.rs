//! Output sinks
//!
//! The set of destinations is closed: standard output, an append-only file,
//! a size-rotated file and a time-rotated file. [`OutputSink`] wraps them in
//! one enum that dispatches by exhaustive match.

pub mod file;
pub mod size_roll;
pub mod std_out;
pub mod time_roll;

pub use file::FileSink;
pub use size_roll::SizeRollSink;
pub use std_out::StdSink;
pub use time_roll::{TimeGap, TimeRollSink};

pub use crate::core::Sink;

use crate::core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A sink that can be attached to several loggers; writes are serialised
/// by the mutex.
pub type SharedSink = Arc<Mutex<OutputSink>>;

pub enum OutputSink {
    Std(StdSink),
    File(FileSink),
    SizeRoll(SizeRollSink),
    TimeRoll(TimeRollSink),
}

impl OutputSink {
    pub fn std() -> Self {
        OutputSink::Std(StdSink::new())
    }

    pub fn file(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        FileSink::new(path).map(OutputSink::File)
    }

    pub fn size_roll(basename: impl Into<String>, max_size: u64) -> Result<Self> {
        SizeRollSink::new(basename, max_size).map(OutputSink::SizeRoll)
    }

    pub fn time_roll(basename: impl Into<String>, gap: TimeGap) -> Result<Self> {
        TimeRollSink::new(basename, gap).map(OutputSink::TimeRoll)
    }

    /// Wrap into a [`SharedSink`]
    pub fn shared(self) -> SharedSink {
        Arc::new(Mutex::new(self))
    }
}

impl Sink for OutputSink {
    fn log(&mut self, data: &[u8]) -> Result<()> {
        match self {
            OutputSink::Std(sink) => sink.log(data),
            OutputSink::File(sink) => sink.log(data),
            OutputSink::SizeRoll(sink) => sink.log(data),
            OutputSink::TimeRoll(sink) => sink.log(data),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            OutputSink::Std(sink) => sink.flush(),
            OutputSink::File(sink) => sink.flush(),
            OutputSink::SizeRoll(sink) => sink.flush(),
            OutputSink::TimeRoll(sink) => sink.flush(),
        }
    }

    fn name(&self) -> &str {
        match self {
            OutputSink::Std(sink) => sink.name(),
            OutputSink::File(sink) => sink.name(),
            OutputSink::SizeRoll(sink) => sink.name(),
            OutputSink::TimeRoll(sink) => sink.name(),
        }
    }
}

impl From<StdSink> for OutputSink {
    fn from(sink: StdSink) -> Self {
        OutputSink::Std(sink)
    }
}

impl From<FileSink> for OutputSink {
    fn from(sink: FileSink) -> Self {
        OutputSink::File(sink)
    }
}

impl From<SizeRollSink> for OutputSink {
    fn from(sink: SizeRollSink) -> Self {
        OutputSink::SizeRoll(sink)
    }
}

impl From<TimeRollSink> for OutputSink {
    fn from(sink: TimeRollSink) -> Self {
        OutputSink::TimeRoll(sink)
    }
}
