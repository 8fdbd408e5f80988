//! Fortin Remote-Start Serial Protocol
//!
//! This crate decodes the byte stream spoken by Fortin-style remote
//! start / alarm controllers over their data-link UART. The stream is a
//! sequence of variable-length frames with no inter-frame gap guarantee,
//! so the receiver must find frame boundaries itself.
//!
//! # Frame Overview
//!
//! Every frame uses the same binary layout:
//! ```text
//! ┌──────┬─────────┬──────┬─────────────┬──────────┬──────┐
//! │ SYNC │ HEADER  │ SIZE │ PAYLOAD     │ CHECKSUM │ TERM │
//! │ 0x0C │ 3B      │ 1B   │ 0–255B      │ 1B       │ 0x0D │
//! └──────┴─────────┴──────┴─────────────┴──────────┴──────┘
//! ```
//!
//! The [`Reassembler`] consumes the link one byte at a time, locates
//! frame boundaries, validates the checksum and terminator, and hands
//! each well-formed frame to a caller-supplied handler. Everything runs
//! in fixed memory with bounded work per byte, so it is safe to feed
//! from a polling loop or an interrupt-driven receive path.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod commands;
pub mod frame;
pub mod reassembler;
pub mod status;

pub use buffer::RingBuffer;
pub use commands::{RemoteCommand, StarterCommand};
pub use frame::{FrameError, FrameView, FRAME_OVERHEAD, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, SYNC, TERMINATOR};
pub use reassembler::{Reassembler, DEFAULT_BUFFER_SIZE};
pub use status::StatusReport;
