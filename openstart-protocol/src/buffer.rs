//! Fixed-capacity circular byte buffer
//!
//! Backing storage for a frame being reassembled. The buffer knows
//! nothing about frame structure; it only provides modular addressing
//! over a fixed array so an in-progress frame never causes allocation.

/// Circular byte buffer of fixed capacity `N`.
///
/// The buffer holds a contiguous logical run of bytes starting at an
/// internal offset, addressed modulo `N` into physical storage. `push`
/// never rejects a byte: the logical length is allowed to run past the
/// capacity, at which point new bytes wrap around and overwrite the
/// oldest ones. Policing that overflow is the caller's job (the
/// reassembler resets before the overrun can corrupt a frame it still
/// cares about).
#[derive(Debug, Clone)]
pub struct RingBuffer<const N: usize> {
    storage: [u8; N],
    start: usize,
    len: usize,
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            storage: [0; N],
            start: 0,
            len: 0,
        }
    }

    /// Append one byte at the logical end of the buffer
    pub fn push(&mut self, byte: u8) {
        self.storage[(self.start + self.len) % N] = byte;
        self.len += 1;
    }

    /// Read the byte at logical index `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Reading past the logical end is a
    /// contract violation by the caller, not a recoverable condition.
    pub fn get(&self, index: usize) -> u8 {
        assert!(index < self.len, "read past logical end of ring buffer");
        self.storage[(self.start + index) % N]
    }

    /// Current logical length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed capacity of the backing storage
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all buffered bytes
    ///
    /// Storage is not zeroed; stale bytes beyond the new logical length
    /// are unreachable through `get`.
    pub fn reset(&mut self) {
        self.start = 0;
        self.len = 0;
    }
}
