//! Sink trait for log output destinations

use super::error::Result;

/// A destination for rendered log bytes.
///
/// Implementations receive already-formatted bytes; a single call may carry
/// one record (sync delivery) or a whole drained batch (async delivery).
pub trait Sink: Send {
    fn log(&mut self, data: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
