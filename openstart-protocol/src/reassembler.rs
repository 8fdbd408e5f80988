//! Byte-stream frame reassembly
//!
//! Turns the raw receive side of the data link into whole frames. The
//! link delivers bytes with no alignment guarantee: a frame may arrive
//! split across many reads, preceded by noise, or truncated. The
//! reassembler accumulates bytes in a [`RingBuffer`] and hands every
//! frame that passes structural and checksum validation to the handler
//! registered at construction, exactly once per frame.
//!
//! Rejected frames are dropped silently and the buffer is *not* reset:
//! a frame that fails its checksum keeps its bytes, the stream stays
//! desynced, and the capacity guard eventually discards the lot. This
//! mirrors the behavior observed on the wire and keeps the per-byte
//! path free of any error channel.

use crate::buffer::RingBuffer;
use crate::frame::{FRAME_OVERHEAD, MAX_FRAME_SIZE, SIZE_OFFSET, SYNC, TERMINATOR};

/// Default reassembly buffer capacity, sized for a worst-case frame
/// (255-byte payload plus framing).
pub const DEFAULT_BUFFER_SIZE: usize = MAX_FRAME_SIZE;

/// Minimum bytes before the SIZE byte can be trusted
const MIN_COMPLETE_LEN: usize = FRAME_OVERHEAD;

/// Stream parser that reassembles and validates frames
///
/// The handler runs synchronously inside [`process`](Self::process),
/// before it returns, on the caller's stack. Handlers must be quick and
/// must not feed bytes back into the same reassembler.
pub struct Reassembler<F, const N: usize = DEFAULT_BUFFER_SIZE>
where
    F: FnMut(&[u8]),
{
    buffer: RingBuffer<N>,
    handler: F,
}

impl<F, const N: usize> Reassembler<F, N>
where
    F: FnMut(&[u8]),
{
    /// Create a reassembler that delivers valid frames to `handler`
    pub fn new(handler: F) -> Self {
        Self {
            buffer: RingBuffer::new(),
            handler,
        }
    }

    /// Feed one byte from the stream
    ///
    /// Accumulates the byte and, if it completes a frame whose declared
    /// length, terminator, and checksum all line up, dispatches that
    /// frame to the handler and clears the buffer.
    pub fn process(&mut self, byte: u8) {
        if self.buffer.is_empty() && byte != SYNC {
            // Can't be the start of a frame
            return;
        }

        // An in-progress frame that has grown one byte past capacity is
        // never going to complete; drop it before appending. The one
        // byte of margin past capacity is deliberate (see DESIGN.md).
        if self.buffer.len() == self.buffer.capacity() + 1 {
            self.buffer.reset();
        }

        self.buffer.push(byte);

        if self.buffer.len() < MIN_COMPLETE_LEN {
            return;
        }

        let payload_size = self.buffer.get(SIZE_OFFSET) as usize;
        if self.buffer.len() != payload_size + FRAME_OVERHEAD {
            // Still accumulating, or desynced past the declared length
            return;
        }

        let mut frame = [0u8; MAX_FRAME_SIZE];
        let len = self.buffer.len();
        for i in 0..len {
            frame[i] = self.buffer.get(i);
        }

        self.dispatch_if_valid(&frame[..len]);
    }

    /// Discard any partially accumulated frame
    ///
    /// For callers that detect a higher-level desync, such as an idle
    /// timeout on the link. Frame completion resets internally; this
    /// entry point is never required in the normal path.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Number of bytes currently buffered
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Validate a length-complete candidate and dispatch it
    ///
    /// Invalid candidates are dropped without resetting the buffer.
    fn dispatch_if_valid(&mut self, frame: &[u8]) {
        let len = frame.len();
        if len < 3 || frame[len - 1] != TERMINATOR {
            return;
        }

        let sum = crate::frame::checksum(&frame[1..len - 2]);
        if sum != frame[len - 2] {
            return;
        }

        (self.handler)(frame);
        self.buffer.reset();
    }
}
