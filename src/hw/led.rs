use embedded_hal::digital::v2::OutputPin;

/// Status LED wrapper over an active-high push-pull pin.
///
/// Remembers its last commanded state so the tick loop can toggle a
/// heartbeat without reading the pin back.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Wrap a pin, initializing the LED to OFF.
    pub fn new(mut pin: PIN) -> Self {
        pin.set_low().ok();
        Self { pin, is_on: false }
    }

    /// Drive the LED ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }
}
