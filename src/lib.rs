//! Seven-button debounced serial keypad
//! =============================================================================================
//!
//! Each of seven push buttons is sampled once per scan, debounced in software and, on a
//! validated release -> press transition, reported on the serial port as a single symbol
//! followed by a line terminator ('A' for button 0 up to 'G' for button 6).
//!
//! The debounce logic and the polling driver only talk to hardware through the traits in
//! [`hardware::traits`], so everything except the firmware binary runs on the host.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod channel;
pub mod config;
pub mod debounce;
pub mod driver;
pub mod hardware;
pub mod protocol;

pub use channel::Channel;
pub use debounce::Debouncer;
pub use driver::{PollingDriver, Presses};
pub use protocol::{Message, ParseError};
