//! The intervalometer state machine.
//!
//! Provides [`Intervalometer`], which owns the switches, camera lines, delay and
//! display and moves through three phases:
//!
//! ```text
//! Editing --confirm--> Confirming --release, confirm--> Shooting (forever)
//! ```
//!
//! The confirm press that leaves `Editing` has to be let go before `Confirming`
//! will accept another one, so holding the button down starts nothing.
//!
//! Each call to [`Intervalometer::tick`] runs one pass of the current phase and
//! blocks for whatever waits that pass contains. [`Intervalometer::run`] is the
//! host loop for firmware. There is no way back to an earlier phase and no way
//! out of `Shooting` other than removing power.

use crate::camera::{CameraLines, SignalLine};
use crate::config::{Timing, TimingError};
use crate::display::{CharDisplay, Screen};
use crate::interval::{Interval, IntervalSetting};
use crate::session::ShootSession;
use crate::switch::{Debouncer, SwitchBank, SwitchId, SwitchLine};
use crate::time::wait;
use embedded_hal::delay::DelayNs;

/// The phase the controller is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Tens and ones presses adjust the interval. Confirm moves on.
    Editing,
    /// The interval is frozen. Confirm starts the shoot.
    Confirming,
    /// Focus has been primed and frames are being taken.
    Shooting,
}

// Each phase owns its data; it is moved into the next phase on transition.
#[derive(Debug, Clone, Copy)]
enum State {
    Editing(IntervalSetting),
    // `armed` once the confirm line has been seen released
    Confirming { interval: Interval, armed: bool },
    Shooting(ShootSession),
}

/// Time-lapse controller.
///
/// # Type Parameters
/// * `T`, `O`, `C` - Tens, ones and confirm button lines
/// * `F`, `S`, `L` - Focus, shutter and status output lines
/// * `D` - Blocking delay
/// * `X` - Character display
pub struct Intervalometer<T, O, C, F, S, L, D, X>
where
    T: SwitchLine,
    O: SwitchLine,
    C: SwitchLine,
    F: SignalLine,
    S: SignalLine,
    L: SignalLine,
    D: DelayNs,
    X: CharDisplay,
{
    switches: SwitchBank<T, O, C>,
    camera: CameraLines<F, S, L>,
    delay: D,
    screen: Screen<X>,
    timing: Timing,
    debouncer: Debouncer,
    state: State,
}

impl<T, O, C, F, S, L, D, X> Intervalometer<T, O, C, F, S, L, D, X>
where
    T: SwitchLine,
    O: SwitchLine,
    C: SwitchLine,
    F: SignalLine,
    S: SignalLine,
    L: SignalLine,
    D: DelayNs,
    X: CharDisplay,
{
    /// Creates a controller in `Editing` at zero seconds with default timing.
    ///
    /// Draws the editing heading.
    pub fn new(
        switches: SwitchBank<T, O, C>,
        camera: CameraLines<F, S, L>,
        delay: D,
        display: X,
    ) -> Self {
        Self::build(switches, camera, delay, display, Timing::DEFAULT)
    }

    /// Like [`Intervalometer::new`], with custom timing.
    ///
    /// # Returns
    /// * `Err` - `timing` failed [`Timing::validate`]
    pub fn with_timing(
        switches: SwitchBank<T, O, C>,
        camera: CameraLines<F, S, L>,
        delay: D,
        display: X,
        timing: Timing,
    ) -> Result<Self, TimingError> {
        timing.validate()?;
        Ok(Self::build(switches, camera, delay, display, timing))
    }

    fn build(
        switches: SwitchBank<T, O, C>,
        camera: CameraLines<F, S, L>,
        delay: D,
        display: X,
        timing: Timing,
    ) -> Self {
        let mut screen = Screen::new(display);
        screen.show_editing();
        info!("editing interval");

        Self {
            switches,
            camera,
            delay,
            screen,
            timing,
            debouncer: Debouncer::new(timing.debounce),
            state: State::Editing(IntervalSetting::new()),
        }
    }

    /// Runs one pass of the current phase and returns the phase after it.
    ///
    /// - `Editing`: polls tens, ones, redraws the value, polls confirm
    /// - `Confirming`: waits for confirm to be released, then polls it; on a press
    ///   draws the shoot header and primes focus
    /// - `Shooting`: one frame, shutter pulse followed by the interval wait
    pub fn tick(&mut self) -> Phase {
        let state = self.state;
        self.state = match state {
            State::Editing(setting) => self.edit(setting),
            State::Confirming { interval, armed } => self.confirm(interval, armed),
            State::Shooting(session) => self.shoot(session),
        };
        self.phase()
    }

    /// Ticks forever.
    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    fn pressed(&mut self, id: SwitchId) -> bool {
        self.switches.is_pressed(id, &mut self.delay, &self.debouncer)
    }

    fn lock_out(&mut self) {
        wait(&mut self.delay, self.timing.lockout);
    }

    fn edit(&mut self, mut setting: IntervalSetting) -> State {
        if self.pressed(SwitchId::Tens) {
            if !setting.press_tens() {
                debug!("tens already at limit");
            }
            self.lock_out();
        }

        if self.pressed(SwitchId::Ones) {
            if !setting.press_ones() {
                debug!("ones already at limit");
            }
            self.lock_out();
        }

        self.screen.show_interval_value(setting.value());

        if self.pressed(SwitchId::Confirm) {
            let interval = setting.freeze();
            self.screen.show_confirm(interval.secs());
            info!("interval set to {} s, awaiting start", interval.secs());
            return State::Confirming {
                interval,
                armed: false,
            };
        }

        State::Editing(setting)
    }

    fn confirm(&mut self, interval: Interval, armed: bool) -> State {
        let armed = armed || !self.switches.is_active(SwitchId::Confirm);
        if !armed || !self.pressed(SwitchId::Confirm) {
            return State::Confirming { interval, armed };
        }

        self.screen.show_session(interval.secs());
        self.camera
            .prime_focus(&mut self.delay, self.timing.focus_settle, self.timing.focus_hold);
        info!("focus primed, shooting every {} s", interval.secs());

        State::Shooting(ShootSession::new(interval))
    }

    fn shoot(&mut self, mut session: ShootSession) -> State {
        self.camera.fire_shutter(&mut self.delay, self.timing.shutter_hold);

        let frames = session.record_frame();
        self.screen.show_frame_count(frames);
        trace!("frame {}", frames);

        for _ in 0..session.interval().secs() {
            wait(&mut self.delay, self.timing.second);
        }

        State::Shooting(session)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Editing(_) => Phase::Editing,
            State::Confirming { .. } => Phase::Confirming,
            State::Shooting(_) => Phase::Shooting,
        }
    }

    /// Returns the interval in seconds: the live value while editing, the frozen one after.
    pub fn interval_secs(&self) -> u8 {
        match &self.state {
            State::Editing(setting) => setting.value(),
            State::Confirming { interval, .. } => interval.secs(),
            State::Shooting(session) => session.interval().secs(),
        }
    }

    /// Returns the setting being edited, if still editing.
    pub fn setting(&self) -> Option<&IntervalSetting> {
        match &self.state {
            State::Editing(setting) => Some(setting),
            _ => None,
        }
    }

    /// Returns the shoot session, once shooting.
    pub fn session(&self) -> Option<&ShootSession> {
        match &self.state {
            State::Shooting(session) => Some(session),
            _ => None,
        }
    }

    /// Returns frames taken so far; zero before the shoot starts.
    pub fn frame_count(&self) -> u32 {
        self.session().map_or(0, ShootSession::frame_count)
    }

    /// Returns the timing this controller runs with.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}
