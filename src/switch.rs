//! Debounced switch reading.
//!
//! A press is two agreeing samples of an active line taken a debounce window
//! apart. The idle path is a single sample with no delay, so it is cheap to
//! poll continuously. The active path blocks the caller for the whole window,
//! including on bounces that turn out to be false starts.

use crate::time::{Millis, wait};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting a momentary input line.
///
/// Implement this for your button hardware. `true` means the contact is
/// closed, whatever the electrical level. Handle any hardware errors
/// internally; a line that cannot be read should report inactive.
pub trait SwitchLine {
    /// Samples the line once.
    fn is_active(&mut self) -> bool;
}

/// The three operator buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchId {
    /// Adds ten seconds.
    Tens,
    /// Adds one second.
    Ones,
    /// Confirms the setting, then starts the shoot.
    Confirm,
}

/// Two-sample debouncer with a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window: Millis,
}

impl Debouncer {
    /// Creates a debouncer that re-samples after `window`.
    pub const fn new(window: Millis) -> Self {
        Self { window }
    }

    /// Returns the debounce window.
    pub const fn window(&self) -> Millis {
        self.window
    }

    /// Returns true if `line` is active now and still active after the window.
    pub fn is_pressed<L: SwitchLine, D: DelayNs>(&self, line: &mut L, delay: &mut D) -> bool {
        if !line.is_active() {
            return false;
        }

        wait(delay, self.window);
        line.is_active()
    }
}

/// The tens, ones and confirm inputs, addressed by [`SwitchId`].
///
/// Each button keeps its own type, so typed HAL pins can be used without
/// erasing them first.
///
/// # Type Parameters
/// * `T` - Tens button
/// * `O` - Ones button
/// * `C` - Confirm button
pub struct SwitchBank<T: SwitchLine, O: SwitchLine, C: SwitchLine> {
    tens: T,
    ones: O,
    confirm: C,
}

impl<T: SwitchLine, O: SwitchLine, C: SwitchLine> SwitchBank<T, O, C> {
    pub fn new(tens: T, ones: O, confirm: C) -> Self {
        Self {
            tens,
            ones,
            confirm,
        }
    }

    /// Raw, undebounced sample of one switch.
    pub fn is_active(&mut self, id: SwitchId) -> bool {
        match id {
            SwitchId::Tens => self.tens.is_active(),
            SwitchId::Ones => self.ones.is_active(),
            SwitchId::Confirm => self.confirm.is_active(),
        }
    }

    /// Debounced read of one switch.
    pub fn is_pressed<D: DelayNs>(
        &mut self,
        id: SwitchId,
        delay: &mut D,
        debouncer: &Debouncer,
    ) -> bool {
        let pressed = match id {
            SwitchId::Tens => debouncer.is_pressed(&mut self.tens, delay),
            SwitchId::Ones => debouncer.is_pressed(&mut self.ones, delay),
            SwitchId::Confirm => debouncer.is_pressed(&mut self.confirm, delay),
        };
        if pressed {
            trace!("switch {} pressed", id);
        }
        pressed
    }

    /// Gives the lines back.
    pub fn release(self) -> (T, O, C) {
        (self.tens, self.ones, self.confirm)
    }
}
