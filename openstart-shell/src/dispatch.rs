//! Mapping from console command names to data-link commands
//!
//! Handlers that drive the vehicle link directly can use this table to
//! turn a typed command into the [`RemoteCommand`] to put on the wire.
//! Commands that act on the controller itself (version, reset, …) are
//! not listed here; they never reach the link.

use openstart_protocol::RemoteCommand;

/// Look up the data-link command for a console command name
pub fn remote_command_for(name: &str) -> Option<RemoteCommand> {
    match name {
        "lock" => Some(RemoteCommand::Lock),
        "unlock" => Some(RemoteCommand::Unlock),
        "start" => Some(RemoteCommand::Start),
        "stop" => Some(RemoteCommand::Stop),
        "trunk" => Some(RemoteCommand::TrunkRelease),
        "panic" => Some(RemoteCommand::Panic),
        "aux1" => Some(RemoteCommand::Aux1),
        "aux2" => Some(RemoteCommand::Aux2),
        "aux3" => Some(RemoteCommand::Aux3),
        "aux4" => Some(RemoteCommand::Aux4),
        "valet" => Some(RemoteCommand::ToggleValetMode),
        "status" => Some(RemoteCommand::StatusRequest),
        _ => None,
    }
}
