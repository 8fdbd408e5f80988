//! Command vocabulary exchanged over the Fortin data link
//!
//! Two directions of traffic share the frame format:
//! - Antenna → vehicle: remote commands (lock, start, aux channels)
//! - Remote starter → antenna: LED control and status traffic
//!
//! The reassembler never looks at these values; they live inside frame
//! payloads and are interpreted by whoever consumes dispatched frames.

/// Commands originating from the remote antenna, addressed to the car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteCommand {
    Lock,
    Unlock,
    Start,
    Stop,
    TrunkRelease,
    Panic,
    /// Second-stage unlock (passenger doors)
    Unlock2,
    Aux1,
    Aux2,
    Aux3,
    Aux4,
    StatusRequest,
    StatusRequest2,
    ToggleValetMode,
    /// Programming button press
    ProgBtnPress,
}

// Wire format values
const CMD_LOCK: u8 = 0x30;
const CMD_UNLOCK: u8 = 0x31;
const CMD_START: u8 = 0x32;
const CMD_STOP: u8 = 0x33;
const CMD_TRUNK_RELEASE: u8 = 0x34;
const CMD_PANIC: u8 = 0x35;
const CMD_UNLOCK2: u8 = 0x38;
const CMD_AUX1: u8 = 0x39;
const CMD_AUX2: u8 = 0x3A;
const CMD_AUX3: u8 = 0x3B;
const CMD_AUX4: u8 = 0x3C;
const CMD_STATUS_REQUEST: u8 = 0xAA;
const CMD_STATUS_REQUEST2: u8 = 0xAE;
const CMD_TOGGLE_VALET_MODE: u8 = 0xA8;
const CMD_PROG_BTN_PRESS: u8 = 0xE3;

impl RemoteCommand {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_LOCK => Some(RemoteCommand::Lock),
            CMD_UNLOCK => Some(RemoteCommand::Unlock),
            CMD_START => Some(RemoteCommand::Start),
            CMD_STOP => Some(RemoteCommand::Stop),
            CMD_TRUNK_RELEASE => Some(RemoteCommand::TrunkRelease),
            CMD_PANIC => Some(RemoteCommand::Panic),
            CMD_UNLOCK2 => Some(RemoteCommand::Unlock2),
            CMD_AUX1 => Some(RemoteCommand::Aux1),
            CMD_AUX2 => Some(RemoteCommand::Aux2),
            CMD_AUX3 => Some(RemoteCommand::Aux3),
            CMD_AUX4 => Some(RemoteCommand::Aux4),
            CMD_STATUS_REQUEST => Some(RemoteCommand::StatusRequest),
            CMD_STATUS_REQUEST2 => Some(RemoteCommand::StatusRequest2),
            CMD_TOGGLE_VALET_MODE => Some(RemoteCommand::ToggleValetMode),
            CMD_PROG_BTN_PRESS => Some(RemoteCommand::ProgBtnPress),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            RemoteCommand::Lock => CMD_LOCK,
            RemoteCommand::Unlock => CMD_UNLOCK,
            RemoteCommand::Start => CMD_START,
            RemoteCommand::Stop => CMD_STOP,
            RemoteCommand::TrunkRelease => CMD_TRUNK_RELEASE,
            RemoteCommand::Panic => CMD_PANIC,
            RemoteCommand::Unlock2 => CMD_UNLOCK2,
            RemoteCommand::Aux1 => CMD_AUX1,
            RemoteCommand::Aux2 => CMD_AUX2,
            RemoteCommand::Aux3 => CMD_AUX3,
            RemoteCommand::Aux4 => CMD_AUX4,
            RemoteCommand::StatusRequest => CMD_STATUS_REQUEST,
            RemoteCommand::StatusRequest2 => CMD_STATUS_REQUEST2,
            RemoteCommand::ToggleValetMode => CMD_TOGGLE_VALET_MODE,
            RemoteCommand::ProgBtnPress => CMD_PROG_BTN_PRESS,
        }
    }

    /// Returns true for commands that actuate the vehicle
    pub fn is_actuation(&self) -> bool {
        !matches!(
            self,
            RemoteCommand::StatusRequest | RemoteCommand::StatusRequest2
        )
    }
}

/// Commands originating from the remote starter itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StarterCommand {
    LedOn,
    LedOff,
    LedFlashing,
    /// Carries a status payload (see [`StatusReport`](crate::StatusReport))
    StatusUpdate,
    RemotePairing,
}

// Wire format values
const STARTER_LED_ON: u8 = 0x01;
const STARTER_LED_OFF: u8 = 0x02;
const STARTER_LED_FLASHING: u8 = 0x04;
const STARTER_STATUS_UPDATE: u8 = 0xB8;
const STARTER_REMOTE_PAIRING: u8 = 0xBF;

impl StarterCommand {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            STARTER_LED_ON => Some(StarterCommand::LedOn),
            STARTER_LED_OFF => Some(StarterCommand::LedOff),
            STARTER_LED_FLASHING => Some(StarterCommand::LedFlashing),
            STARTER_STATUS_UPDATE => Some(StarterCommand::StatusUpdate),
            STARTER_REMOTE_PAIRING => Some(StarterCommand::RemotePairing),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            StarterCommand::LedOn => STARTER_LED_ON,
            StarterCommand::LedOff => STARTER_LED_OFF,
            StarterCommand::LedFlashing => STARTER_LED_FLASHING,
            StarterCommand::StatusUpdate => STARTER_STATUS_UPDATE,
            StarterCommand::RemotePairing => STARTER_REMOTE_PAIRING,
        }
    }
}
