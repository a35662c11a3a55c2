//! Interval composition from tens and ones presses.

/// Highest value either digit can reach. Further presses are ignored.
pub const MAX_DIGIT: u8 = 9;

/// The interval while it is being edited.
///
/// Starts at zero. Each tens press adds ten seconds and each ones press adds
/// one, up to [`MAX_DIGIT`] per digit, so the value stays within 0-99.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalSetting {
    tens: u8,
    ones: u8,
}

impl IntervalSetting {
    /// A setting at zero seconds.
    pub const fn new() -> Self {
        Self { tens: 0, ones: 0 }
    }

    /// Counts one tens press. Returns false if the digit was already at its limit.
    pub fn press_tens(&mut self) -> bool {
        bump(&mut self.tens)
    }

    /// Counts one ones press. Returns false if the digit was already at its limit.
    pub fn press_ones(&mut self) -> bool {
        bump(&mut self.ones)
    }

    pub const fn tens(&self) -> u8 {
        self.tens
    }

    pub const fn ones(&self) -> u8 {
        self.ones
    }

    /// `tens * 10 + ones`, in seconds.
    pub const fn value(&self) -> u8 {
        self.tens * 10 + self.ones
    }

    /// Freezes the setting.
    pub const fn freeze(self) -> Interval {
        Interval(self.value())
    }
}

fn bump(digit: &mut u8) -> bool {
    if *digit >= MAX_DIGIT {
        return false;
    }
    *digit += 1;
    true
}

/// A confirmed interval in whole seconds. Cannot change once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval(u8);

impl Interval {
    pub const fn secs(&self) -> u8 {
        self.0
    }
}

impl From<IntervalSetting> for Interval {
    fn from(setting: IntervalSetting) -> Self {
        setting.freeze()
    }
}
