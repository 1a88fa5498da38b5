//! STM32F103 Blue Pill Seven-Button Serial Keypad
//! =============================================================================================
//!
//! This firmware scans seven push buttons, debounces them in software and reports every
//! validated press on USART1 as one line holding the button's symbol ('A' .. 'G').
//!
//! Hardware Connections:
//!   Buttons (active high, internal pull-down) -> Blue Pill
//!      Button A -> PA0
//!      Button B -> PA1
//!      Button C -> PA2
//!      Button D -> PA3
//!      Button E -> PA4
//!      Button F -> PA5
//!      Button G -> PA6
//!      Common   -> 3.3V
//!
//!   Serial (9600 8N1) -> USB-UART adapter
//!      TX   -> PA9 (USART1_TX)
//!      GND  -> GND
//!
//! Startup:
//! 1. Configure inputs and USART1
//! 2. Wait 1 s for the line to settle
//! 3. Send "READY"
//! 4. Scan forever, without yielding

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{
    gpio::{Input, Pull},
    usart::UartTx,
};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use keypad_serial::PollingDriver;
use keypad_serial::config::STARTUP_DELAY_MS;
use keypad_serial::hardware::{
    ButtonBank,
    clock::EmbassyClock,
    serial::{SerialSink, uart_config},
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Initialize peripherals with default configuration
    let p = embassy_stm32::init(Default::default());
    info!("keypad starting");

    // Button inputs, in channel order
    let buttons = ButtonBank::active_high([
        Input::new(p.PA0, Pull::Down),
        Input::new(p.PA1, Pull::Down),
        Input::new(p.PA2, Pull::Down),
        Input::new(p.PA3, Pull::Down),
        Input::new(p.PA4, Pull::Down),
        Input::new(p.PA5, Pull::Down),
        Input::new(p.PA6, Pull::Down),
    ]);

    // Transmit-only USART1 on PA9
    let tx = UartTx::new_blocking(p.USART1, p.PA9, uart_config()).unwrap();

    let mut driver = PollingDriver::new(buttons, SerialSink::new(tx), EmbassyClock);

    Timer::after_millis(STARTUP_DELAY_MS).await;

    if let Err(e) = driver.announce_ready() {
        warn!("ready line not sent: {}", e);
    }

    loop {
        let Err(e) = driver.run();
        warn!("serial write failed: {}", e);
    }
}
