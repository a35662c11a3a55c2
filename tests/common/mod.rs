//! Shared test infrastructure for intervalometer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use intervalometer::{
    CameraLines, CharDisplay, Intervalometer, SignalLine, SwitchBank, SwitchId, SwitchLine, Timing,
};

// ============================================================================
// Virtual Clock
// ============================================================================

/// Shared virtual time, advanced only by delays and by the test itself
#[derive(Clone, Default)]
pub struct Clock {
    now_ns: Rc<Cell<u64>>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.now_ns.set(self.now_ns.get() + ms * 1_000_000);
    }
}

/// Delay that moves the virtual clock instead of sleeping
pub struct VirtualDelay {
    clock: Clock,
}

impl VirtualDelay {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.now_ns.set(self.clock.now_ns.get() + ns as u64);
    }
}

// ============================================================================
// Scripted Switch
// ============================================================================

/// Button whose contact state is a function of virtual time
///
/// Active while `held` is set, or while the clock is inside one of the
/// scheduled `[start, end)` windows.
#[derive(Clone)]
pub struct ScriptedSwitch {
    clock: Clock,
    held: Rc<Cell<bool>>,
    windows: Rc<RefCell<Vec<(u64, u64)>>>,
    reads: Rc<Cell<usize>>,
}

impl ScriptedSwitch {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            held: Rc::new(Cell::new(false)),
            windows: Rc::new(RefCell::new(Vec::new())),
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Close the contact from now for `ms` milliseconds
    pub fn press_for(&self, ms: u64) {
        let now = self.clock.now_ms();
        self.windows.borrow_mut().push((now, now + ms));
    }

    pub fn hold(&self, held: bool) {
        self.held.set(held);
    }

    /// Number of times the controller sampled this line
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SwitchLine for ScriptedSwitch {
    fn is_active(&mut self) -> bool {
        self.reads.set(self.reads.get() + 1);
        let now = self.clock.now_ms();
        self.held.get()
            || self
                .windows
                .borrow()
                .iter()
                .any(|&(start, end)| now >= start && now < end)
    }
}

// ============================================================================
// Recording Output Lines
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Focus,
    Shutter,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub at_ms: u64,
    pub output: Output,
    pub active: bool,
}

/// Output line that logs every level change with its virtual timestamp
pub struct RecordingLine {
    clock: Clock,
    output: Output,
    log: Rc<RefCell<Vec<Edge>>>,
}

impl SignalLine for RecordingLine {
    fn set_active(&mut self, active: bool) {
        self.log.borrow_mut().push(Edge {
            at_ms: self.clock.now_ms(),
            output: self.output,
            active,
        });
    }
}

// ============================================================================
// Grid Display
// ============================================================================

pub const COLS: usize = 16;
pub const ROWS: usize = 2;

struct Panel {
    cells: [[u8; COLS]; ROWS],
    col: usize,
    row: usize,
    inits: usize,
    clears: usize,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            col: 0,
            row: 0,
            inits: 0,
            clears: 0,
        }
    }
}

/// 16x2 character panel; text past the last column is clipped
#[derive(Clone, Default)]
pub struct GridDisplay {
    panel: Rc<RefCell<Panel>>,
}

impl GridDisplay {
    /// Row contents with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        let panel = self.panel.borrow();
        String::from_utf8_lossy(&panel.cells[row])
            .trim_end()
            .to_string()
    }

    pub fn inits(&self) -> usize {
        self.panel.borrow().inits
    }

    pub fn clears(&self) -> usize {
        self.panel.borrow().clears
    }
}

impl CharDisplay for GridDisplay {
    fn init(&mut self) {
        self.panel.borrow_mut().inits += 1;
    }

    fn clear(&mut self) {
        let mut panel = self.panel.borrow_mut();
        panel.cells = [[b' '; COLS]; ROWS];
        panel.col = 0;
        panel.row = 0;
        panel.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let mut panel = self.panel.borrow_mut();
        panel.col = col as usize;
        panel.row = (row as usize).min(ROWS - 1);
    }

    fn write_str(&mut self, text: &str) {
        let mut panel = self.panel.borrow_mut();
        for byte in text.bytes() {
            if panel.col < COLS {
                let (row, col) = (panel.row, panel.col);
                panel.cells[row][col] = byte;
            }
            panel.col += 1;
        }
    }
}

// ============================================================================
// Test Rig
// ============================================================================

pub type TestController = Intervalometer<
    ScriptedSwitch,
    ScriptedSwitch,
    ScriptedSwitch,
    RecordingLine,
    RecordingLine,
    RecordingLine,
    VirtualDelay,
    GridDisplay,
>;

/// A controller plus handles onto everything it drives
pub struct Rig {
    pub clock: Clock,
    pub tens: ScriptedSwitch,
    pub ones: ScriptedSwitch,
    pub confirm: ScriptedSwitch,
    pub display: GridDisplay,
    pub edges: Rc<RefCell<Vec<Edge>>>,
    pub timing: Timing,
}

impl Rig {
    pub fn new() -> (Self, TestController) {
        Self::with_timing(Timing::DEFAULT)
    }

    pub fn with_timing(timing: Timing) -> (Self, TestController) {
        let clock = Clock::new();
        let tens = ScriptedSwitch::new(&clock);
        let ones = ScriptedSwitch::new(&clock);
        let confirm = ScriptedSwitch::new(&clock);
        let display = GridDisplay::default();
        let edges = Rc::new(RefCell::new(Vec::new()));

        let line = |output| RecordingLine {
            clock: clock.clone(),
            output,
            log: edges.clone(),
        };

        let controller = Intervalometer::with_timing(
            SwitchBank::new(tens.clone(), ones.clone(), confirm.clone()),
            CameraLines::new(line(Output::Focus), line(Output::Shutter), line(Output::Status)),
            VirtualDelay::new(&clock),
            display.clone(),
            timing,
        )
        .unwrap();

        let rig = Self {
            clock,
            tens,
            ones,
            confirm,
            display,
            edges,
            timing,
        };
        (rig, controller)
    }

    pub fn switch(&self, id: SwitchId) -> &ScriptedSwitch {
        match id {
            SwitchId::Tens => &self.tens,
            SwitchId::Ones => &self.ones,
            SwitchId::Confirm => &self.confirm,
        }
    }

    /// A clean press, just longer than the debounce window, followed by one tick
    pub fn press(&self, controller: &mut TestController, id: SwitchId) {
        self.switch(id)
            .press_for(self.timing.debounce.as_millis() as u64 + 1);
        controller.tick();
    }

    /// Hands off every button for one lock-out window, then one tick
    pub fn idle(&self, controller: &mut TestController) {
        self.clock
            .advance_ms(self.timing.lockout.as_millis() as u64);
        controller.tick();
    }

    /// Times at which `output` went active
    pub fn rising_edges(&self, output: Output) -> Vec<u64> {
        self.edges
            .borrow()
            .iter()
            .filter(|edge| edge.output == output && edge.active)
            .map(|edge| edge.at_ms)
            .collect()
    }

    /// Times at which `output` was released, ignoring the initial release at construction
    pub fn falling_edges(&self, output: Output) -> Vec<u64> {
        let edges = self.edges.borrow();
        let mut seen_active = false;
        let mut falls = Vec::new();
        for edge in edges.iter().filter(|edge| edge.output == output) {
            if edge.active {
                seen_active = true;
            } else if seen_active {
                falls.push(edge.at_ms);
            }
        }
        falls
    }
}

/// Editing presses: `tens` tens presses, then `ones` ones presses, one tick each
pub fn enter_interval(rig: &Rig, controller: &mut TestController, tens: usize, ones: usize) {
    for _ in 0..tens {
        rig.press(controller, SwitchId::Tens);
    }
    for _ in 0..ones {
        rig.press(controller, SwitchId::Ones);
    }
}

/// Confirm, let go, confirm again: Editing to Shooting with focus primed on return
pub fn confirm_twice(rig: &Rig, controller: &mut TestController) {
    rig.press(controller, SwitchId::Confirm);
    rig.idle(controller);
    rig.press(controller, SwitchId::Confirm);
}

/// Enter an interval, confirm it, then start the shoot (focus is primed on return)
pub fn start_shooting(tens: usize, ones: usize) -> (Rig, TestController) {
    let (rig, mut controller) = Rig::new();
    enter_interval(&rig, &mut controller, tens, ones);
    confirm_twice(&rig, &mut controller);
    (rig, controller)
}
