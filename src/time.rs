//! Millisecond durations and blocking waits.
//!
//! The controller never reads a clock. It only blocks, through an injected
//! [`DelayNs`], for whole-millisecond spans expressed as [`Millis`].

use embedded_hal::delay::DelayNs;

/// A span of time in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Zero duration constant.
    pub const ZERO: Self = Millis(0);

    /// Creates a duration from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Millis(millis)
    }

    /// Creates a duration from whole seconds, saturating at `u32::MAX` ms.
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Millis(secs.saturating_mul(1000))
    }

    /// Returns the duration in milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Returns true for a zero-length span.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Blocks for `duration`. A zero span returns without touching the delay.
#[inline]
pub fn wait<D: DelayNs>(delay: &mut D, duration: Millis) {
    if !duration.is_zero() {
        delay.delay_ms(duration.0);
    }
}
