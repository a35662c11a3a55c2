//! Camera trigger lines: focus, shutter and the status indicator.
//!
//! Provides [`CameraLines`], which owns the three outputs and knows the two
//! pulse shapes the shoot needs: the one-off focus prime and the per-frame
//! shutter pulse. Also defines the [`SignalLine`] trait for hardware abstraction.

use crate::time::{Millis, wait};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting an output line.
///
/// Implement this for whatever closes the camera contact (transistor,
/// optocoupler) or drives the indicator. `true` means asserted. Handle any
/// hardware errors internally - this method cannot fail.
pub trait SignalLine {
    /// Asserts or releases the line.
    fn set_active(&mut self, active: bool);
}

/// The focus, shutter and status outputs.
///
/// # Type Parameters
/// * `F` - Focus line
/// * `S` - Shutter line
/// * `L` - Status indicator line
pub struct CameraLines<F: SignalLine, S: SignalLine, L: SignalLine> {
    focus: F,
    shutter: S,
    status: L,
}

impl<F: SignalLine, S: SignalLine, L: SignalLine> CameraLines<F, S, L> {
    /// Takes the three outputs and releases all of them.
    pub fn new(mut focus: F, mut shutter: S, mut status: L) -> Self {
        focus.set_active(false);
        shutter.set_active(false);
        status.set_active(false);

        Self {
            focus,
            shutter,
            status,
        }
    }

    /// Waits `settle`, then holds focus for `hold`.
    ///
    /// Focus is released before this returns.
    pub fn prime_focus<D: DelayNs>(&mut self, delay: &mut D, settle: Millis, hold: Millis) {
        wait(delay, settle);
        self.focus.set_active(true);
        wait(delay, hold);
        self.focus.set_active(false);
    }

    /// Holds shutter and status together for `hold`, then releases both.
    pub fn fire_shutter<D: DelayNs>(&mut self, delay: &mut D, hold: Millis) {
        self.shutter.set_active(true);
        self.status.set_active(true);
        wait(delay, hold);
        self.shutter.set_active(false);
        self.status.set_active(false);
    }

    /// Gives the lines back.
    pub fn release(self) -> (F, S, L) {
        (self.focus, self.shutter, self.status)
    }
}
