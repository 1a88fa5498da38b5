use crate::config::{CHANNEL_COUNT, DEBOUNCE_DELAY_MS, SYMBOLS};
use crate::debounce::Debouncer;

/// One button: its position in the scan order, the symbol it reports and its debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    index: u8,
    symbol: u8,
    debouncer: Debouncer,
}

impl Channel {
    pub const fn new(index: u8, symbol: u8, debounce_delay_ms: u64) -> Self {
        Self {
            index,
            symbol,
            debouncer: Debouncer::new(debounce_delay_ms),
        }
    }

    /// Builds the configured channel set, in scan order.
    pub fn configured() -> [Channel; CHANNEL_COUNT] {
        core::array::from_fn(|i| Channel::new(i as u8, SYMBOLS[i], DEBOUNCE_DELAY_MS))
    }

    /// See [`Debouncer::process_sample`].
    pub fn process_sample(&mut self, raw_reading: bool, now_ms: u64) -> bool {
        self.debouncer.process_sample(raw_reading, now_ms)
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn symbol(&self) -> u8 {
        self.symbol
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn stable_state(&self) -> bool {
        self.debouncer.stable_state()
    }

    pub fn last_raw_reading(&self) -> bool {
        self.debouncer.last_raw_reading()
    }
}
