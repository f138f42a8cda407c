pub mod adc;
pub mod console;
pub mod led;
pub mod pins;

pub use adc::Adc;
pub use console::Console;
pub use led::Led;
pub use pins::BoardPins;
