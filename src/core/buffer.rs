//! Growable byte buffer moved through the async pipeline

/// Initial capacity of a default buffer (1 MiB)
pub const BUFFER_DEFAULT_SIZE: usize = 1024 * 1024;
/// Capacity below which growth doubles (8 MiB)
pub const THRESHOLD_SIZE: usize = 8 * 1024 * 1024;
/// Growth step once the threshold is reached (1 MiB)
pub const LINEAR_GROWTH: usize = 1024 * 1024;

/// Contiguous byte region with read and write cursors.
///
/// `read_pos <= write_pos <= capacity` always holds. Writes grow the
/// storage when needed; [`reset`](Buffer::reset) rewinds the cursors but
/// keeps the storage so a reused buffer does not reallocate.
#[derive(Debug)]
pub struct Buffer {
    data: Vec<u8>,
    read_pos: usize,
    write_pos: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self::with_capacity(BUFFER_DEFAULT_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            read_pos: 0,
            write_pos: 0,
        }
    }

    /// Append `bytes`, growing the storage first if it does not fit
    pub fn push(&mut self, bytes: &[u8]) {
        self.ensure_writable(bytes.len());
        let end = self.write_pos + bytes.len();
        self.data[self.write_pos..end].copy_from_slice(bytes);
        self.write_pos = end;
    }

    /// Unread bytes
    pub fn readable(&self) -> &[u8] {
        &self.data[self.read_pos..self.write_pos]
    }

    pub fn readable_size(&self) -> usize {
        self.write_pos - self.read_pos
    }

    pub fn writable_size(&self) -> usize {
        self.data.len() - self.write_pos
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_pos == self.write_pos
    }

    /// Mark up to `len` bytes as read
    pub fn consume(&mut self, len: usize) {
        self.read_pos += len.min(self.readable_size());
    }

    /// Rewind both cursors, keeping the allocated storage
    pub fn reset(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
    }

    /// Exchange storage and cursors with `other` without copying bytes
    pub fn swap(&mut self, other: &mut Buffer) {
        std::mem::swap(self, other);
    }

    fn ensure_writable(&mut self, len: usize) {
        if self.writable_size() >= len {
            return;
        }
        let current = self.data.len();
        let new_capacity = if current < THRESHOLD_SIZE {
            current * 2 + len
        } else {
            current + LINEAR_GROWTH + len
        };
        self.data.resize(new_capacity, 0);
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
