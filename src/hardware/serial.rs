use super::traits::LineSink;
use crate::config::{BAUD_RATE, LINE_TERMINATOR};
use embassy_stm32::mode::Mode;
use embassy_stm32::usart::{self, UartTx};

/// USART configuration used for the keypad output: `BAUD_RATE`, 8N1.
pub fn uart_config() -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = BAUD_RATE;
    config
}

/// Serial transmitter writing whole lines with blocking transfers.
pub struct SerialSink<'d, M: Mode> {
    tx: UartTx<'d, M>,
}

impl<'d, M: Mode> SerialSink<'d, M> {
    pub fn new(tx: UartTx<'d, M>) -> Self {
        Self { tx }
    }
}

impl<'d, M: Mode> LineSink for SerialSink<'d, M> {
    type Error = usart::Error;

    fn write_line(&mut self, line: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(line)?;
        self.tx.blocking_write(LINE_TERMINATOR)?;
        self.tx.blocking_flush()
    }
}
