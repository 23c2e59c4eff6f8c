//! Append-only file sink

use crate::core::util::{create_directory_recursive, parent_dir_of};
use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends every write to a single file.
///
/// Missing parent directories are created when the sink is constructed.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the directory cannot be created
    /// or the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn log(&mut self, data: &[u8]) -> Result<()> {
        self.file.write_all(data).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Create the parent directory of `path` and open it for appending
pub(crate) fn open_append(path: &Path) -> Result<File> {
    let parent = parent_dir_of(path);
    create_directory_recursive(&parent).map_err(|e| {
        LoggerError::sink_open(
            path.display().to_string(),
            format!("Failed to create directory '{}'", parent.display()),
            e,
        )
    })?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::sink_open(path.display().to_string(), "Failed to open", e))
}
