//! Status payload carried by starter status-update frames
//!
//! Example payload (9 bytes):
//! ```text
//!  FF FF F1  01  84  00 00  01 48
//!  └──┬───┘  │   │   └─┬─┘  └─┬─┘
//!   address  │  flags  type  counter
//!            └ undocumented
//! ```

/// Minimum payload length for a decodable status report
pub const STATUS_PAYLOAD_LEN: usize = 9;

// Flag byte bit assignments, LSB first
const FLAG_VALET_MODE: u8 = 1 << 0;
const FLAG_REMOTE_STARTED: u8 = 1 << 1;
const FLAG_ENGINE_TURNING_OVER: u8 = 1 << 2;
const FLAG_ACC: u8 = 1 << 3;
const FLAG_UNKNOWN1: u8 = 1 << 4;
const FLAG_TRUNK_OPEN: u8 = 1 << 5;
const FLAG_DOOR_OPENED: u8 = 1 << 6;
const FLAG_ARMED: u8 = 1 << 7;

/// Decoded status-update payload
///
/// The flag bits are the useful part; the counter fields increment with
/// status traffic and the fourth byte has not been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Remote address
    pub address: [u8; 3],
    /// Undocumented byte following the address
    pub unknown: u8,
    flags: u8,
    /// Counter type bytes
    pub counter_type: [u8; 2],
    /// Counter bytes
    pub counter: [u8; 2],
}

impl StatusReport {
    /// Decode a status report from a frame payload
    ///
    /// Returns `None` when the payload is shorter than
    /// [`STATUS_PAYLOAD_LEN`]; extra trailing bytes are ignored.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() < STATUS_PAYLOAD_LEN {
            return None;
        }

        Some(Self {
            address: [payload[0], payload[1], payload[2]],
            unknown: payload[3],
            flags: payload[4],
            counter_type: [payload[5], payload[6]],
            counter: [payload[7], payload[8]],
        })
    }

    /// Valet mode engaged
    pub fn valet_mode(&self) -> bool {
        self.flags & FLAG_VALET_MODE != 0
    }

    /// Engine running from a remote start
    pub fn remote_started(&self) -> bool {
        self.flags & FLAG_REMOTE_STARTED != 0
    }

    /// Starter motor currently cranking
    pub fn engine_turning_over(&self) -> bool {
        self.flags & FLAG_ENGINE_TURNING_OVER != 0
    }

    /// Accessory circuit energized
    pub fn acc(&self) -> bool {
        self.flags & FLAG_ACC != 0
    }

    /// Undecoded flag bit
    pub fn unknown_flag1(&self) -> bool {
        self.flags & FLAG_UNKNOWN1 != 0
    }

    /// Trunk open
    pub fn trunk_open(&self) -> bool {
        self.flags & FLAG_TRUNK_OPEN != 0
    }

    /// A door has been opened
    pub fn door_opened(&self) -> bool {
        self.flags & FLAG_DOOR_OPENED != 0
    }

    /// Alarm armed
    pub fn armed(&self) -> bool {
        self.flags & FLAG_ARMED != 0
    }
}
