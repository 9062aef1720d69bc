//! Main-loop LED rendering.
//!
//! Provides [`Animator`] which maps the shared state onto the two LED lines,
//! plus the pure frame functions it renders from. The frame functions have no
//! hardware dependency, so the full output mapping is unit-testable.

use crate::gpio::Led;
use crate::state::SharedState;
use crate::types::{AppMode, LedFrame, RunMode};

/// Frame for one animation step in `Run` mode.
///
/// Each run mode is a two-frame animation selected by the current phase:
/// the plain blink modes light their LED(s) on the first step and go dark on
/// the second, while [`RunMode::Led12AltBlink`] swaps the two LEDs between
/// steps.
pub fn animation_frame(mode: RunMode, first_step: bool) -> LedFrame {
    match mode {
        RunMode::Led1Blink => {
            if first_step {
                LedFrame::new(true, false)
            } else {
                LedFrame::OFF
            }
        }
        RunMode::Led2Blink => {
            if first_step {
                LedFrame::new(false, true)
            } else {
                LedFrame::OFF
            }
        }
        RunMode::Led12Blink => {
            if first_step {
                LedFrame::new(true, true)
            } else {
                LedFrame::OFF
            }
        }
        RunMode::Led12AltBlink => {
            if first_step {
                LedFrame::new(true, false)
            } else {
                LedFrame::new(false, true)
            }
        }
    }
}

/// Frame for `Control` mode: the run mode read as a 2-bit mask,
/// bit 0 driving LED1 and bit 1 driving LED2.
pub fn control_frame(mode: RunMode) -> LedFrame {
    LedFrame::new(mode.bit0(), mode.bit1())
}

/// Drives the two LED lines from the shared state.
///
/// Owns the main-loop side of the demo. [`step`](Animator::step) is one
/// busy-poll iteration; [`run`](Animator::run) spins it forever on hardware,
/// and a test harness can call `step` directly instead.
pub struct Animator<'s, L1: Led, L2: Led> {
    led1: L1,
    led2: L2,
    state: &'s SharedState,
}

impl<'s, L1: Led, L2: Led> Animator<'s, L1, L2> {
    /// Creates an animator with both LEDs turned off.
    pub fn new(mut led1: L1, mut led2: L2, state: &'s SharedState) -> Self {
        led1.set(false);
        led2.set(false);

        Self { led1, led2, state }
    }

    /// One iteration of the main loop.
    ///
    /// In `Run` mode, returns `None` until a full step interval has elapsed,
    /// then renders the current animation frame, toggles the phase and
    /// returns the frame. In `Control` mode, renders the bitmask frame on
    /// every call - a continuous, non-gated output.
    pub fn step(&mut self) -> Option<LedFrame> {
        match self.state.app_mode() {
            AppMode::Run => {
                if !self.state.take_step() {
                    return None;
                }

                let frame = animation_frame(self.state.run_mode(), self.state.first_step());
                self.apply(frame);
                self.state.toggle_first_step();
                Some(frame)
            }
            AppMode::Control => {
                let frame = control_frame(self.state.run_mode());
                self.apply(frame);
                Some(frame)
            }
        }
    }

    /// Busy-polls [`step`](Animator::step) forever. This loop cannot fail;
    /// its only side effects are the two LED lines.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn apply(&mut self, frame: LedFrame) {
        self.led1.set(frame.led1);
        self.led2.set(frame.led2);
    }
}
