/// Raw, unfiltered levels of the button input lines.
pub trait InputBank {
    type Error;

    /// Current logical level of line `index` (true = pressed).
    fn read_pin(&mut self, index: usize) -> Result<bool, Self::Error>;
}

/// Line-oriented byte output (the serial port on target).
pub trait LineSink {
    type Error;

    /// Writes `line` followed by the line terminator.
    fn write_line(&mut self, line: &[u8]) -> Result<(), Self::Error>;
}

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<T: InputBank + ?Sized> InputBank for &mut T {
    type Error = T::Error;

    fn read_pin(&mut self, index: usize) -> Result<bool, Self::Error> {
        T::read_pin(self, index)
    }
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    type Error = T::Error;

    fn write_line(&mut self, line: &[u8]) -> Result<(), Self::Error> {
        T::write_line(self, line)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }
}
