//! Frame layout, checksum, and encoding for the Fortin data link
//!
//! Frame format (variable length, minimum 7 bytes):
//! - SYNC (1 byte): 0x0C start-of-frame marker
//! - HEADER (3 bytes): frame-specific bytes, opaque at this layer
//! - SIZE (1 byte): payload length P, total frame length is P + 7
//! - PAYLOAD (P bytes): command or status data
//! - CHECKSUM (1 byte): 8-bit wrapping sum of every byte between SYNC
//!   and CHECKSUM (offsets 1 through L-3)
//! - TERM (1 byte): 0x0D end-of-frame marker

use heapless::Vec;

/// Start-of-frame marker
pub const SYNC: u8 = 0x0C;

/// End-of-frame marker
pub const TERMINATOR: u8 = 0x0D;

/// Bytes of framing around the payload (sync + header + size + checksum + terminator)
pub const FRAME_OVERHEAD: usize = 7;

/// Maximum payload size in bytes (SIZE is a single byte)
pub const MAX_PAYLOAD_SIZE: usize = 255;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FRAME_OVERHEAD;

/// Logical offset of the SIZE byte within a frame
pub const SIZE_OFFSET: usize = 4;

/// Errors that can occur when building a frame for transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Output buffer too small for the encoded frame
    BufferTooSmall,
}

/// 8-bit wrapping sum over the checksummed interior of a frame
///
/// Callers pass the bytes at offsets 1 through L-3: the three header
/// bytes, the SIZE byte, and the payload. SYNC, CHECKSUM, and TERM are
/// excluded.
pub fn checksum(interior: &[u8]) -> u8 {
    interior.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Encode a frame into `out`, returning the number of bytes written
///
/// Produces the full wire form: sync, the three header bytes, payload
/// size, payload, checksum, terminator.
pub fn encode(header: [u8; 3], payload: &[u8], out: &mut [u8]) -> Result<usize, FrameError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(FrameError::PayloadTooLarge);
    }
    let total = payload.len() + FRAME_OVERHEAD;
    if out.len() < total {
        return Err(FrameError::BufferTooSmall);
    }

    out[0] = SYNC;
    out[1..4].copy_from_slice(&header);
    out[SIZE_OFFSET] = payload.len() as u8;
    out[5..5 + payload.len()].copy_from_slice(payload);
    out[total - 2] = checksum(&out[1..total - 2]);
    out[total - 1] = TERMINATOR;

    Ok(total)
}

/// Encode a frame into a heapless Vec
pub fn encode_to_vec(header: [u8; 3], payload: &[u8]) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
    let mut buf = [0u8; MAX_FRAME_SIZE];
    let len = encode(header, payload, &mut buf)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buf[..len])
        .map_err(|_| FrameError::BufferTooSmall)?;
    Ok(vec)
}

/// Read-only view over the bytes of a dispatched frame
///
/// The reassembler only ever hands out structurally valid frames, so
/// the accessors here index unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    bytes: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Wrap a validated frame
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The three header bytes following SYNC
    pub fn header(&self) -> [u8; 3] {
        [self.bytes[1], self.bytes[2], self.bytes[3]]
    }

    /// Declared payload size
    pub fn payload_size(&self) -> u8 {
        self.bytes[SIZE_OFFSET]
    }

    /// The payload bytes
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[5..self.bytes.len() - 2]
    }

    /// The checksum byte carried by the frame
    pub fn checksum(&self) -> u8 {
        self.bytes[self.bytes.len() - 2]
    }

    /// The complete frame, framing included
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
