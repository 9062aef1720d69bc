//! Shared state bridging the timer interrupt and the main loop.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::types::{AppMode, RunMode};

/// Number of 10 ms ticks between animation steps (one step per second).
pub const STEP_TICKS: u8 = 100;

/// State shared between the interrupt context (button scanner) and the main
/// loop (animator).
///
/// Every field is a single narrow atomic accessed with `Relaxed` ordering.
/// That is sufficient here: the tick counter and modes each have a single
/// producer, and the one multi-field update (the mode switch from Button 2)
/// does not need to be atomic with rendering - at worst the animator draws
/// one stale frame.
///
/// `new` is `const` so the state can live in a `static` and be handed by
/// reference to both execution contexts.
#[derive(Debug)]
pub struct SharedState {
    app_mode: AtomicU8,
    run_mode: AtomicU8,
    ticks: AtomicU8,
    first_step: AtomicBool,
}

impl SharedState {
    /// Creates the startup state: `Run` / `Led1Blink`, counter at zero,
    /// phase at first step.
    pub const fn new() -> Self {
        Self {
            app_mode: AtomicU8::new(AppMode::Run as u8),
            run_mode: AtomicU8::new(RunMode::Led1Blink as u8),
            ticks: AtomicU8::new(0),
            first_step: AtomicBool::new(true),
        }
    }

    /// Current application mode.
    pub fn app_mode(&self) -> AppMode {
        AppMode::from_u8(self.app_mode.load(Ordering::Relaxed))
    }

    /// Current run mode.
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_u8(self.run_mode.load(Ordering::Relaxed))
    }

    /// Current animation phase: true while the first of the two frames is due.
    pub fn first_step(&self) -> bool {
        self.first_step.load(Ordering::Relaxed)
    }

    /// Sets the application mode.
    pub fn set_app_mode(&self, mode: AppMode) {
        self.app_mode.store(mode as u8, Ordering::Relaxed);
    }

    /// Sets the run mode.
    pub fn set_run_mode(&self, mode: RunMode) {
        self.run_mode.store(mode as u8, Ordering::Relaxed);
    }

    pub(crate) fn set_first_step(&self, first: bool) {
        self.first_step.store(first, Ordering::Relaxed);
    }

    pub(crate) fn toggle_first_step(&self) {
        self.first_step.fetch_xor(true, Ordering::Relaxed);
    }

    /// Advances the tick counter by one. Interrupt side only.
    pub(crate) fn bump_ticks(&self) {
        // Wraps like the u8 it is; the step check below is a >= threshold
        // test, so a wrap only delays one step.
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns true and resets the counter once a full step interval has
    /// elapsed. Main loop side only.
    pub(crate) fn take_step(&self) -> bool {
        if self.ticks.load(Ordering::Relaxed) < STEP_TICKS {
            return false;
        }
        self.ticks.store(0, Ordering::Relaxed);
        true
    }

    /// Presets the counter to the step threshold so the next `take_step`
    /// fires immediately.
    pub(crate) fn force_step_due(&self) {
        self.ticks.store(STEP_TICKS, Ordering::Relaxed);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
