//! Size-rotated file sink

use super::file::open_append;
use crate::core::util::{create_directory_recursive, local_time, parent_dir_of};
use crate::core::{Clock, LoggerError, Result, Sink, SystemClock};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes into a series of files, starting a new one once the current file
/// has grown past `max_size` bytes.
///
/// Files are named `basename + YYYYmmwHHMMSS + "." + counter + ".log"`,
/// where `w` is the weekday (0 = Sunday) and `counter` increases with every
/// file this sink opens, so two rotations within one second do not collide.
/// The counter is per sink instance; separate processes sharing a basename
/// are not coordinated.
///
/// # Examples
///
/// ```no_run
/// use rust_pattern_logger::sinks::SizeRollSink;
///
/// // roll-20250108210304.0.log, roll-20250108210311.1.log, ...
/// let sink = SizeRollSink::new("./rollfile/roll-", 1024 * 1024).unwrap();
/// ```
pub struct SizeRollSink {
    basename: String,
    max_size: u64,
    cur_size: u64,
    counter: u64,
    file: Option<(File, PathBuf)>,
    clock: Arc<dyn Clock>,
}

impl SizeRollSink {
    /// Create a sink that rotates after `max_size` bytes.
    ///
    /// The first file is opened on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the basename's directory cannot
    /// be created.
    pub fn new(basename: impl Into<String>, max_size: u64) -> Result<Self> {
        Self::with_clock(basename, max_size, Arc::new(SystemClock))
    }

    /// Like [`new`](Self::new), naming files from `clock`
    pub fn with_clock(
        basename: impl Into<String>,
        max_size: u64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let basename = basename.into();
        let parent = parent_dir_of(&basename);
        create_directory_recursive(&parent).map_err(|e| {
            LoggerError::sink_open(
                basename.clone(),
                format!("Failed to create directory '{}'", parent.display()),
                e,
            )
        })?;

        Ok(Self {
            basename,
            max_size,
            cur_size: 0,
            counter: 0,
            file: None,
            clock,
        })
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Bytes written to the current file
    pub fn current_size(&self) -> u64 {
        self.cur_size
    }

    /// Path of the file currently written to, if one is open
    pub fn current_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|(_, path)| path.as_path())
    }

    fn should_roll(&self) -> bool {
        self.file.is_none() || self.cur_size > self.max_size
    }

    fn next_file_name(&self) -> PathBuf {
        let time = local_time(self.clock.now());
        PathBuf::from(format!(
            "{}{}.{}.log",
            self.basename,
            time.format("%Y%m%w%H%M%S"),
            self.counter
        ))
    }

    /// Open the next file, keeping the current one if that fails
    fn roll(&mut self) -> Result<()> {
        let path = self.next_file_name();
        let file = open_append(&path)?;
        self.file = Some((file, path));
        self.cur_size = 0;
        self.counter += 1;
        Ok(())
    }
}

impl Sink for SizeRollSink {
    fn log(&mut self, data: &[u8]) -> Result<()> {
        if self.should_roll() {
            if let Err(e) = self.roll() {
                if self.file.is_none() {
                    return Err(e);
                }
                eprintln!(
                    "[LOGGER WARNING] Rotation of '{}' failed, continuing in current file: {}",
                    self.basename, e
                );
            }
        }

        let Some((file, path)) = self.file.as_mut() else {
            return Err(LoggerError::config("SizeRollSink", "no file open"));
        };
        file.write_all(data).map_err(|e| {
            LoggerError::io_operation("writing rolling log file", path.display().to_string(), e)
        })?;
        self.cur_size += data.len() as u64;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some((file, _)) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "size_roll"
    }
}
