//! Standard output sink

use crate::core::{Result, Sink};
use std::io::Write;

/// Writes rendered bytes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSink;

impl StdSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdSink {
    fn log(&mut self, data: &[u8]) -> Result<()> {
        std::io::stdout().lock().write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "std"
    }
}
