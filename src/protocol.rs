//! Line protocol spoken on the serial port.
//!
//! Every message is one line ending in [`LINE_TERMINATOR`](crate::config::LINE_TERMINATOR):
//!
//! | Line        | Meaning                                   |
//! |-------------|-------------------------------------------|
//! | `READY`     | firmware finished startup, scanning begins |
//! | `A` .. `G`  | the button with that symbol was pressed    |
//!
//! Encoding is done on target; [`Message::parse`] is for whatever reads the port.

use crate::config::{READY_MARKER, channel_for_symbol};
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    Ready,
    Press(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing left after stripping the terminator.
    Empty,
    /// Neither the ready marker nor a single uppercase ASCII letter.
    Unrecognized,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty line"),
            ParseError::Unrecognized => f.write_str("unrecognized line"),
        }
    }
}

impl Message {
    /// Line payload, without the terminator.
    pub fn payload(&self) -> &[u8] {
        match self {
            Message::Ready => READY_MARKER,
            Message::Press(symbol) => core::slice::from_ref(symbol),
        }
    }

    /// Parses one received line; a trailing `\r`, `\n` or `\r\n` is ignored.
    pub fn parse(line: &[u8]) -> Result<Self, ParseError> {
        let line = match line {
            [rest @ .., b'\r', b'\n'] => rest,
            [rest @ .., b'\n'] | [rest @ .., b'\r'] => rest,
            _ => line,
        };

        match line {
            [] => Err(ParseError::Empty),
            l if l == READY_MARKER => Ok(Message::Ready),
            &[symbol] if symbol.is_ascii_uppercase() => Ok(Message::Press(symbol)),
            _ => Err(ParseError::Unrecognized),
        }
    }

    /// Channel that reports this symbol, if it is a press of a configured button.
    pub fn channel(&self) -> Option<usize> {
        match *self {
            Message::Press(symbol) => channel_for_symbol(symbol),
            Message::Ready => None,
        }
    }
}
