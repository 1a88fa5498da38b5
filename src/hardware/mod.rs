pub mod gpio_button;
pub mod traits;

#[cfg(feature = "stm32")]
pub mod clock;
#[cfg(feature = "stm32")]
pub mod serial;

pub use gpio_button::{ButtonBank, GpioButton};
pub use traits::{Clock, InputBank, LineSink};
