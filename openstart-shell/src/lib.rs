//! Serial Console for the Openstart Controller
//!
//! A small line discipline for the maintenance console exposed on the
//! controller's USB serial port. It owns input editing only: echo,
//! backspace, ctrl-C, and line termination. What a completed line
//! *means* is decided by the [`CommandHandler`] the caller supplies, so
//! the console itself stays free of hardware concerns.
//!
//! Output goes through any [`embedded_io::Write`] sink, which on target
//! is the UART/CDC transmit side and in tests is a plain byte vector.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod console;
pub mod dispatch;

pub use console::{CommandHandler, Console, PROMPT};
pub use dispatch::remote_command_for;
