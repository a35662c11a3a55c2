//! Adapters from `embedded-hal` 1.0 pins to [`SwitchLine`] and [`SignalLine`].
//!
//! Buttons are expected to be wired to ground with the pull-up enabled, so a
//! closed contact reads low. Camera and status outputs are driven high to
//! assert. HAL errors are swallowed: an unreadable input counts as released
//! and a failed write is ignored, since the controller has no way to act on
//! either.

use crate::camera::SignalLine;
use crate::switch::SwitchLine;
use embedded_hal::digital::{InputPin, OutputPin};

/// An input pin that is active while low.
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> SwitchLine for ActiveLow<P> {
    fn is_active(&mut self) -> bool {
        self.0.is_low().unwrap_or(false)
    }
}

/// An output pin that is asserted by driving it high.
pub struct ActiveHigh<P>(pub P);

impl<P: OutputPin> SignalLine for ActiveHigh<P> {
    fn set_active(&mut self, active: bool) {
        let _ = if active {
            self.0.set_high()
        } else {
            self.0.set_low()
        };
    }
}
