#![no_std]
#![no_main]

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use intervalometer::{
    CameraLines, CharDisplay, Intervalometer, SignalLine, SwitchBank, SwitchLine,
};
use panic_halt as _;

// ============================================================================
// Minimal Hardware
// ============================================================================

/// Zero-size input that reads whatever the optimizer can't see through
pub struct MinimalSwitch;

impl SwitchLine for MinimalSwitch {
    fn is_active(&mut self) -> bool {
        core::hint::black_box(false)
    }
}

/// Zero-size output for measuring library overhead
pub struct MinimalLine;

impl SignalLine for MinimalLine {
    fn set_active(&mut self, active: bool) {
        core::hint::black_box(active);
    }
}

/// Busy-wait delay, close enough for a size build
pub struct MinimalDelay;

impl DelayNs for MinimalDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(core::hint::black_box(ns));
    }
}

/// Display that discards everything
pub struct MinimalDisplay;

impl CharDisplay for MinimalDisplay {
    fn init(&mut self) {
        core::hint::black_box(());
    }

    fn clear(&mut self) {
        core::hint::black_box(());
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        core::hint::black_box((col, row));
    }

    fn write_str(&mut self, text: &str) {
        core::hint::black_box(text);
    }
}

#[entry]
fn main() -> ! {
    let controller = Intervalometer::new(
        SwitchBank::new(MinimalSwitch, MinimalSwitch, MinimalSwitch),
        CameraLines::new(MinimalLine, MinimalLine, MinimalLine),
        MinimalDelay,
        MinimalDisplay,
    );

    // Pulls in every phase; never returns
    controller.run()
}
