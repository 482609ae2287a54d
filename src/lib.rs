//! A slow-producer fixture for exercising downstream consumers.
//!
//! The fixture writes a burst of identical lines to standard output, then
//! writes the same line once more one byte at a time with a wall-clock pause
//! immediately before each newline, then writes a second burst and exits.
//! Pointing a log collector, pipe reader or timeout harness at it yields a
//! producer that stalls mid-line under controlled timing.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod emit;

pub use crate::emit::{DEFAULT_DELAY_SECS, DEFAULT_NUM_LINES, Emission, MESSAGE};
