//! Build-time configuration.
//!
//! Nothing here is adjustable at runtime; changing a value means reflashing.

/// Number of button channels scanned per loop iteration.
pub const CHANNEL_COUNT: usize = 7;

/// Symbol written for a validated press, indexed by channel.
pub const SYMBOLS: [u8; CHANNEL_COUNT] = *b"ABCDEFG";

/// Minimum time (ms) the raw level must hold before it is accepted as the stable level.
///
/// The window is a minimum, not exact: the transition is noticed on the first scan after it
/// has elapsed, so the observed latency is this value plus up to one polling interval.
pub const DEBOUNCE_DELAY_MS: u64 = 300;

/// Delay (ms) between peripheral setup and the readiness line.
pub const STARTUP_DELAY_MS: u64 = 1000;

/// USART baud rate, 8N1.
pub const BAUD_RATE: u32 = 9600;

/// Line written once before the polling loop starts.
pub const READY_MARKER: &[u8] = b"READY";

/// Terminator appended to every line written on the serial port.
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Returns the channel assigned to `symbol`, if any.
pub fn channel_for_symbol(symbol: u8) -> Option<usize> {
    SYMBOLS.iter().position(|&s| s == symbol)
}

const fn symbols_are_distinct(symbols: &[u8]) -> bool {
    let mut i = 0;
    while i < symbols.len() {
        let mut j = i + 1;
        while j < symbols.len() {
            if symbols[i] == symbols[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(symbols_are_distinct(&SYMBOLS), "channel symbols must be distinct");
