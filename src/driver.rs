//! Polling driver: scans every channel once per iteration and reports validated presses.
//!
//! The scan never blocks or yields. Channels are visited in index order, so presses that
//! validate in the same iteration are written in index order.

use core::convert::Infallible;

use crate::channel::Channel;
use crate::config::CHANNEL_COUNT;
use crate::hardware::traits::{Clock, InputBank, LineSink};
use crate::protocol::Message;

/// Indices of the channels that validated a press during one scan, in emission order.
pub type Presses = heapless::Vec<u8, CHANNEL_COUNT>;

pub struct PollingDriver<I, S, C> {
    inputs: I,
    sink: S,
    clock: C,
    channels: [Channel; CHANNEL_COUNT],
}

impl<I, S, C> PollingDriver<I, S, C>
where
    I: InputBank,
    S: LineSink,
    C: Clock,
{
    /// Driver over the configured channel set, all released.
    pub fn new(inputs: I, sink: S, clock: C) -> Self {
        Self::with_channels(inputs, sink, clock, Channel::configured())
    }

    pub fn with_channels(inputs: I, sink: S, clock: C, channels: [Channel; CHANNEL_COUNT]) -> Self {
        Self {
            inputs,
            sink,
            clock,
            channels,
        }
    }

    /// Writes the readiness line. Called once, after the startup delay.
    pub fn announce_ready(&mut self) -> Result<(), S::Error> {
        info!("keypad ready, scanning {} channels", CHANNEL_COUNT);
        self.sink.write_line(Message::Ready.payload())
    }

    /// Runs one scan over all channels.
    ///
    /// A failed input read is treated as "no change" for that channel. A failed write is
    /// returned immediately; the remaining channels are picked up on the next scan.
    pub fn poll_once(&mut self) -> Result<Presses, S::Error> {
        let now_ms = self.clock.now_ms();
        let mut presses = Presses::new();

        for channel in self.channels.iter_mut() {
            let index = channel.index();
            let raw = match self.inputs.read_pin(index as usize) {
                Ok(level) => level,
                Err(_) => {
                    warn!("channel {} read failed, keeping last level", index);
                    channel.last_raw_reading()
                }
            };

            let was_pressed = channel.stable_state();
            if channel.process_sample(raw, now_ms) {
                info!("channel {} pressed at {} ms", index, now_ms);
                self.sink.write_line(Message::Press(channel.symbol()).payload())?;
                // Capacity equals the channel count.
                let _ = presses.push(index);
            } else if was_pressed && !channel.stable_state() {
                debug!("channel {} released at {} ms", index, now_ms);
            }
        }

        Ok(presses)
    }

    /// Scans forever. Returns only when the sink fails.
    pub fn run(&mut self) -> Result<Infallible, S::Error> {
        loop {
            self.poll_once()?;
        }
    }

    pub fn channels(&self) -> &[Channel; CHANNEL_COUNT] {
        &self.channels
    }

    /// Gives back the input bank, sink and clock.
    pub fn release(self) -> (I, S, C) {
        (self.inputs, self.sink, self.clock)
    }
}
