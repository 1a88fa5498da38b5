use super::traits::InputBank;
use embedded_hal::digital::InputPin;

/// A push button on a single GPIO line.
pub struct GpioButton<P> {
    pin: P,
    active_high: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Button that pulls the line high when pressed (pull-down wiring).
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_high: true,
        }
    }

    /// Button that pulls the line low when pressed (pull-up wiring).
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_high: false,
        }
    }

    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        if self.active_high {
            self.pin.is_high()
        } else {
            self.pin.is_low()
        }
    }
}

/// Index out of range or a pin-level read error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    NoSuchPin(usize),
    Pin(E),
}

/// Fixed set of buttons addressed by channel index.
pub struct ButtonBank<P, const N: usize> {
    buttons: [GpioButton<P>; N],
}

impl<P: InputPin, const N: usize> ButtonBank<P, N> {
    pub fn new(buttons: [GpioButton<P>; N]) -> Self {
        Self { buttons }
    }

    /// Bank of active-high buttons, one per pin, in channel order.
    pub fn active_high(pins: [P; N]) -> Self {
        Self::new(pins.map(GpioButton::active_high))
    }
}

impl<P: InputPin, const N: usize> InputBank for ButtonBank<P, N> {
    type Error = ReadError<P::Error>;

    fn read_pin(&mut self, index: usize) -> Result<bool, Self::Error> {
        self.buttons
            .get_mut(index)
            .ok_or(ReadError::NoSuchPin(index))?
            .is_pressed()
            .map_err(ReadError::Pin)
    }
}
