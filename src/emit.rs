//! The three-phase emission sequence: a burst of full lines, one line
//! written byte-by-byte with a pause at each newline, and a second burst.

use std::io::{self, Write};
use std::time::Duration;

/// The fixed line the fixture emits. One line of text, newline-terminated.
pub const MESSAGE: &str = "this is a default (sheddableplus)\n";

/// Default number of full-line repetitions before and after the byte-wise phase.
pub const DEFAULT_NUM_LINES: u64 = 5;

/// Default pause, in seconds, applied before each newline of the byte-wise phase.
pub const DEFAULT_DELAY_SECS: u64 = 5;

/// A single run of the emission sequence.
///
/// The pause is taken as a closure rather than performed inline, so tests can
/// record when it fires instead of sleeping. The binary passes
/// [`std::thread::sleep`].
#[derive(Debug, Clone)]
pub struct Emission {
    num_lines: u64,
    delay: Duration,
    message: String,
}

impl Emission {
    /// Creates an emission of [`MESSAGE`] with the given repetitions and pause.
    pub fn new(num_lines: u64, delay: Duration) -> Self {
        Self {
            num_lines,
            delay,
            message: MESSAGE.into(),
        }
    }

    /// Replaces the emitted line. The message should be newline-terminated;
    /// a message without a newline never pauses.
    #[cfg(test)]
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Runs the full sequence against `out`, calling `pause` with the
    /// configured delay immediately before each newline byte of the middle
    /// phase.
    ///
    /// Every write is flushed, including the single-byte writes, so a reader
    /// on the other end of a pipe observes the trickle rather than one
    /// buffered block at exit.
    pub fn run<W: Write>(&self, out: &mut W, mut pause: impl FnMut(Duration)) -> io::Result<()> {
        let message = self.message.as_bytes();

        for _ in 0..self.num_lines {
            out.write_all(message)?;
            out.flush()?;
        }

        for &byte in message {
            if byte == b'\n' {
                pause(self.delay);
            }
            out.write_all(&[byte])?;
            out.flush()?;
        }

        for _ in 0..self.num_lines {
            out.write_all(message)?;
            out.flush()?;
        }

        Ok(())
    }
}
