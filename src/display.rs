//! Character display abstraction and the screens the controller draws.
//!
//! Layout on a 16x2 panel:
//!
//! ```text
//! Editing      Confirming       Shooting
//! Set Interval:  Interval: 12s    Interval: 12 secs
//! 12 seconds     Press to start   Snaps: 42
//! ```
//!
//! Numbers are formatted into a fixed-capacity [`heapless::String`], so
//! nothing here allocates.

use core::fmt::Write;
use heapless::String;

/// Trait for abstracting a character display.
///
/// Implement this for your LCD driver. Handle any hardware errors internally.
/// Text that runs past the last column may be clipped.
pub trait CharDisplay {
    /// Brings the panel up with the cursor hidden.
    fn init(&mut self);

    /// Blanks the panel and homes the cursor.
    fn clear(&mut self);

    /// Moves the cursor. Column and row are zero-based.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Writes text at the cursor, advancing it.
    fn write_str(&mut self, text: &str);
}

/// Column the frame counter is drawn at, just past `"Snaps: "`.
pub const FRAME_COUNT_COLUMN: u8 = 7;

const TEXT_CAPACITY: usize = 24;

type Text = String<TEXT_CAPACITY>;

fn format_line(args: core::fmt::Arguments<'_>) -> Text {
    let mut text = Text::new();
    // The longest line is "Interval: 99 secs"; a u32 frame count is 10 digits.
    let _ = text.write_fmt(args);
    text
}

/// Draws the controller's screens on a [`CharDisplay`].
pub struct Screen<X: CharDisplay> {
    display: X,
}

impl<X: CharDisplay> Screen<X> {
    pub fn new(display: X) -> Self {
        Self { display }
    }

    /// Resets the panel and writes the editing heading on row 0.
    pub fn show_editing(&mut self) {
        self.display.init();
        self.display.clear();
        self.display.write_str("Set Interval:");
    }

    /// Overwrites row 1 with the interval being edited.
    pub fn show_interval_value(&mut self, secs: u8) {
        self.display.set_cursor(0, 1);
        self.display.write_str(&format_line(format_args!("{} seconds", secs)));
    }

    /// The confirmation prompt.
    pub fn show_confirm(&mut self, secs: u8) {
        self.display.init();
        self.display.clear();
        self.display.write_str(&format_line(format_args!("Interval: {}s", secs)));
        self.display.set_cursor(0, 1);
        self.display.write_str("Press to start");
    }

    /// The shoot header with an empty frame counter.
    pub fn show_session(&mut self, secs: u8) {
        self.display.clear();
        self.display.write_str(&format_line(format_args!("Interval: {} secs", secs)));
        self.display.set_cursor(0, 1);
        self.display.write_str("Snaps: ");
    }

    /// Overwrites the frame counter.
    pub fn show_frame_count(&mut self, frames: u32) {
        self.display.set_cursor(FRAME_COUNT_COLUMN, 1);
        self.display.write_str(&format_line(format_args!("{}", frames)));
    }

    /// Gives the display back.
    pub fn release(self) -> X {
        self.display
    }
}
