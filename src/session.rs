//! The running shoot.

use crate::interval::Interval;

/// Interval plus frame counter for one shoot.
///
/// The interval is fixed at creation. The counter only goes up; it saturates
/// at `u32::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShootSession {
    interval: Interval,
    frame_count: u32,
}

impl ShootSession {
    /// Creates a session with no frames taken.
    pub const fn new(interval: Interval) -> Self {
        Self {
            interval,
            frame_count: 0,
        }
    }

    pub const fn interval(&self) -> Interval {
        self.interval
    }

    pub const fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Counts a completed shutter pulse and returns the new total.
    pub fn record_frame(&mut self) -> u32 {
        self.frame_count = self.frame_count.saturating_add(1);
        self.frame_count
    }
}
