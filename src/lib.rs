#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Intervalometer`**: The controller. Owns the switches, camera lines, delay and display
//! - **`Phase`**: Where the controller is (`Editing`, `Confirming` or `Shooting`)
//! - **`SwitchLine`**: Trait to implement for your button inputs
//! - **`SignalLine`**: Trait to implement for your focus, shutter and status outputs
//! - **`CharDisplay`**: Trait to implement for your character display
//! - **`Debouncer`**: Two-sample press detection across a blocking window
//! - **`IntervalSetting`** / **`Interval`**: The interval while editing, and once frozen
//! - **`ShootSession`**: Interval plus frame counter for the running shoot
//! - **`Timing`**: Named timing constants for debounce, lock-out, focus and shutter
//!
//! All waiting goes through an `embedded_hal::delay::DelayNs`, so the whole state
//! machine can be driven on a virtual clock in tests.

#[macro_use]
mod fmt;

pub mod time;
pub mod config;
pub mod switch;
pub mod interval;
pub mod session;
pub mod camera;
pub mod display;
pub mod controller;
pub mod hal;

pub use camera::{CameraLines, SignalLine};
pub use config::{Timing, TimingError};
pub use controller::{Intervalometer, Phase};
pub use display::CharDisplay;
pub use hal::{ActiveHigh, ActiveLow};
pub use interval::{Interval, IntervalSetting, MAX_DIGIT};
pub use session::ShootSession;
pub use switch::{Debouncer, SwitchBank, SwitchId, SwitchLine};
pub use time::Millis;
