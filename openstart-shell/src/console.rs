//! Line editing and dispatch for the serial console
//!
//! Bytes arrive one at a time from the serial port. The console echoes
//! printable input, supports backspace and ctrl-C, and hands each
//! completed line to the registered handler. Lines of the form
//! `name=value` go to the handler's assignment path, everything else to
//! its command path.

use embedded_io::Write;
use heapless::Vec;

/// Prompt shown when prompting is enabled
pub const PROMPT: &str = "\r\nors> ";

/// Default line buffer size in bytes
pub const DEFAULT_LINE_SIZE: usize = 128;

const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Receiver for completed console lines
pub trait CommandHandler {
    /// Run a plain command line, e.g. `start` or `version`
    fn execute(&mut self, line: &str);

    /// Apply a `name=value` assignment, e.g. `Verbose=1`
    fn assign(&mut self, line: &str);
}

/// Console line editor
///
/// `N` is the line buffer size; a line that grows to `N - 2` bytes is
/// discarded without dispatch.
pub struct Console<const N: usize = DEFAULT_LINE_SIZE> {
    line: Vec<u8, N>,
    show_prompt: bool,
}

impl<const N: usize> Default for Console<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Console<N> {
    /// Create a console with prompting disabled
    pub fn new() -> Self {
        Self {
            line: Vec::new(),
            show_prompt: false,
        }
    }

    /// Enable or disable the `ors>` prompt
    pub fn set_prompt(&mut self, enabled: bool) {
        self.show_prompt = enabled;
    }

    /// Returns true if the prompt is enabled
    pub fn prompt_enabled(&self) -> bool {
        self.show_prompt
    }

    /// Feed one byte of console input
    ///
    /// Echoes editing feedback to `out` and dispatches to `handler`
    /// when a line completes. Errors are the sink's write errors;
    /// dispatch itself cannot fail.
    pub fn process_byte<W, H>(
        &mut self,
        byte: u8,
        out: &mut W,
        handler: &mut H,
    ) -> Result<(), W::Error>
    where
        W: Write,
        H: CommandHandler,
    {
        match byte {
            // Carriage returns are noise from terminals sending CRLF
            b'\r' => Ok(()),
            b'\n' => {
                out.write_all(b"\r\n")?;
                self.dispatch(handler);
                self.reset_line(out)
            }
            BACKSPACE | DELETE => {
                if self.line.pop().is_some() {
                    out.write_all(&[byte])?;
                }
                Ok(())
            }
            CTRL_C => {
                self.line.clear();
                self.reset_line(out)
            }
            _ => {
                // Cannot fail: the overflow check below keeps the line
                // short of capacity.
                let _ = self.line.push(byte);
                out.write_all(&[byte])?;
                if self.line.len() == N - 2 {
                    self.line.clear();
                    self.reset_line(out)?;
                }
                Ok(())
            }
        }
    }

    /// Feed a batch of console input
    pub fn process<W, H>(&mut self, bytes: &[u8], out: &mut W, handler: &mut H) -> Result<(), W::Error>
    where
        W: Write,
        H: CommandHandler,
    {
        for &byte in bytes {
            self.process_byte(byte, out, handler)?;
        }
        Ok(())
    }

    /// Number of bytes in the line being edited
    pub fn pending(&self) -> usize {
        self.line.len()
    }

    fn dispatch<H: CommandHandler>(&mut self, handler: &mut H) {
        // Lines that are not valid UTF-8 are dropped; nothing in the
        // command vocabulary is non-ASCII.
        if let Ok(line) = core::str::from_utf8(&self.line) {
            if line.is_empty() {
                // Nothing typed, nothing to do
            } else if line.find('=').is_some_and(|idx| idx > 0) {
                handler.assign(line);
            } else {
                handler.execute(line);
            }
        }
        self.line.clear();
    }

    fn reset_line<W: Write>(&mut self, out: &mut W) -> Result<(), W::Error> {
        if self.show_prompt {
            out.write_all(PROMPT.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::vec::Vec as StdVec;

    #[derive(Default)]
    struct Recorder {
        executed: StdVec<String>,
        assigned: StdVec<String>,
    }

    impl CommandHandler for Recorder {
        fn execute(&mut self, line: &str) {
            self.executed.push(String::from(line));
        }

        fn assign(&mut self, line: &str) {
            self.assigned.push(String::from(line));
        }
    }

    #[derive(Default)]
    struct Sink(StdVec<u8>);

    impl embedded_io::ErrorType for Sink {
        type Error = core::convert::Infallible;
    }

    impl embedded_io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn console() -> Console<128> {
        Console::new()
    }

    #[test]
    fn test_line_dispatches_as_command() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"start\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["start"]);
        assert!(h.assigned.is_empty());
        assert_eq!(c.pending(), 0);
    }

    #[test]
    fn test_assignment_goes_to_assign_path() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"Verbose=1\n", &mut out, &mut h).unwrap();

        assert_eq!(h.assigned, ["Verbose=1"]);
        assert!(h.executed.is_empty());
    }

    #[test]
    fn test_leading_equals_is_a_command() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"=oops\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["=oops"]);
        assert!(h.assigned.is_empty());
    }

    #[test]
    fn test_empty_line_is_ignored() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"\n\r\n", &mut out, &mut h).unwrap();

        assert!(h.executed.is_empty());
        assert!(h.assigned.is_empty());
    }

    #[test]
    fn test_carriage_return_ignored() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"lock\r\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["lock"]);
    }

    #[test]
    fn test_input_is_echoed() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"ab", &mut out, &mut h).unwrap();

        assert_eq!(out.0, b"ab");
    }

    #[test]
    fn test_backspace_edits_line() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"locj\x08k\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["lock"]);
    }

    #[test]
    fn test_backspace_on_empty_line_not_echoed() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process_byte(0x08, &mut out, &mut h).unwrap();

        assert!(out.0.is_empty());
    }

    #[test]
    fn test_delete_acts_as_backspace() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"ax\x7F\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["a"]);
    }

    #[test]
    fn test_ctrl_c_discards_line() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"garbage\x03start\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["start"]);
    }

    #[test]
    fn test_overlong_line_discarded() {
        let mut c = Console::<8>::new();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        // Buffer resets at N - 2 = 6 bytes: "abcdef" is discarded and
        // the remaining input starts a fresh line.
        c.process(b"abcdefgh\n", &mut out, &mut h).unwrap();

        assert_eq!(h.executed, ["gh"]);
        assert_eq!(c.pending(), 0);
    }

    #[test]
    fn test_prompt_after_line_when_enabled() {
        let mut c = console();
        c.set_prompt(true);
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(b"\n", &mut out, &mut h).unwrap();

        assert!(out.0.ends_with(PROMPT.as_bytes()));
    }

    proptest::proptest! {
        #[test]
        fn prop_printable_input_without_newline_never_dispatches(
            bytes in proptest::collection::vec(0x20u8..0x7F, 0..64),
        ) {
            let mut c = console();
            let mut out = Sink::default();
            let mut h = Recorder::default();

            c.process(&bytes, &mut out, &mut h).unwrap();

            proptest::prop_assert!(h.executed.is_empty());
            proptest::prop_assert!(h.assigned.is_empty());
            proptest::prop_assert_eq!(c.pending(), bytes.len());
        }
    }

    #[test]
    fn test_invalid_utf8_line_dropped() {
        let mut c = console();
        let mut out = Sink::default();
        let mut h = Recorder::default();

        c.process(&[0xFF, 0xFE, b'\n'], &mut out, &mut h).unwrap();

        assert!(h.executed.is_empty());
        assert!(h.assigned.is_empty());
        assert_eq!(c.pending(), 0);
    }
}
