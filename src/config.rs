//! Timing constants and the [`Timing`] set the controller runs with.

use crate::time::Millis;

/// How long a switch must stay active between its two samples.
pub const DEBOUNCE_WINDOW: Millis = Millis::from_millis(250);

/// Pause after an accepted press so one physical press counts once.
pub const LOCKOUT_WINDOW: Millis = Millis::from_millis(250);

/// Wait after entering the shoot before focus is asserted.
pub const FOCUS_SETTLE: Millis = Millis::from_secs(2);

/// How long the focus line is held for the camera to lock focus.
pub const FOCUS_HOLD: Millis = Millis::from_secs(2);

/// How long the shutter and status lines are held per frame.
pub const SHUTTER_HOLD: Millis = Millis::from_secs(1);

/// Length of one interval tick. The interval is counted in these.
pub const SECOND_TICK: Millis = Millis::from_secs(1);

/// Timing used by the controller.
///
/// [`Timing::DEFAULT`] carries the constants above. The `with_*` methods exist
/// mostly for tests and bring-up on slow hardware; run [`Timing::validate`]
/// (or go through `Intervalometer::with_timing`, which does) before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub debounce: Millis,
    pub lockout: Millis,
    pub focus_settle: Millis,
    pub focus_hold: Millis,
    pub shutter_hold: Millis,
    pub second: Millis,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        debounce: DEBOUNCE_WINDOW,
        lockout: LOCKOUT_WINDOW,
        focus_settle: FOCUS_SETTLE,
        focus_hold: FOCUS_HOLD,
        shutter_hold: SHUTTER_HOLD,
        second: SECOND_TICK,
    };

    pub const fn with_debounce(mut self, debounce: Millis) -> Self {
        self.debounce = debounce;
        self
    }

    pub const fn with_lockout(mut self, lockout: Millis) -> Self {
        self.lockout = lockout;
        self
    }

    pub const fn with_focus(mut self, settle: Millis, hold: Millis) -> Self {
        self.focus_settle = settle;
        self.focus_hold = hold;
        self
    }

    pub const fn with_shutter_hold(mut self, hold: Millis) -> Self {
        self.shutter_hold = hold;
        self
    }

    pub const fn with_second(mut self, second: Millis) -> Self {
        self.second = second;
        self
    }

    /// Checks the values the shoot loop relies on.
    ///
    /// A zero shutter hold never closes the camera contacts, and a zero tick
    /// collapses every interval to back-to-back frames.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.shutter_hold.is_zero() {
            return Err(TimingError::ZeroShutterHold);
        }
        if self.second.is_zero() {
            return Err(TimingError::ZeroSecondTick);
        }
        Ok(())
    }

    /// Time from the start of one frame to the start of the next.
    pub const fn frame_period(&self, interval_secs: u8) -> Millis {
        let wait = self.second.0.saturating_mul(interval_secs as u32);
        Millis(self.shutter_hold.0.saturating_add(wait))
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Shutter hold is zero.
    ZeroShutterHold,

    /// Interval tick is zero.
    ZeroSecondTick,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroShutterHold => {
                write!(f, "shutter hold must be non-zero")
            }
            TimingError::ZeroSecondTick => {
                write!(f, "interval tick must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}
