//! Interrupt-side button processing.

use crate::debounce::Debouncer;
use crate::gpio::Button;
use crate::state::SharedState;
use crate::types::{AppMode, ButtonState};

/// Samples both buttons on the periodic tick and applies their actions to
/// the shared state.
///
/// Owns the interrupt side of the demo: call [`poll`](ButtonScanner::poll)
/// from the 10 ms timer interrupt. The scanner runs to completion inside the
/// interrupt and takes no locks.
pub struct ButtonScanner<'s, B1: Button, B2: Button> {
    button1: B1,
    button2: B2,
    debounce1: Debouncer,
    debounce2: Debouncer,
    state: &'s SharedState,
}

impl<'s, B1: Button, B2: Button> ButtonScanner<'s, B1, B2> {
    /// Creates a scanner with both debouncers released.
    pub fn new(button1: B1, button2: B2, state: &'s SharedState) -> Self {
        Self {
            button1,
            button2,
            debounce1: Debouncer::new(),
            debounce2: Debouncer::new(),
            state,
        }
    }

    /// One tick: advances the animation counter, then debounces and
    /// processes both buttons.
    ///
    /// Button 1 cycles the run mode, effective only in `Control` mode. Its
    /// debouncer still runs in `Run` mode so edge bookkeeping survives a
    /// mode switch mid-press. Button 2 toggles the application mode and
    /// forces the animation counter due with the phase reset to first, so
    /// the frame after a switch back to `Run` renders immediately instead of
    /// up to a second later.
    pub fn poll(&mut self) {
        self.state.bump_ticks();

        if self.debounce1.sample(self.button1.is_pressed())
            && self.state.app_mode() == AppMode::Control
        {
            self.state.set_run_mode(self.state.run_mode().next());
        }

        if self.debounce2.sample(self.button2.is_pressed()) {
            self.state.set_app_mode(self.state.app_mode().next());
            self.state.force_step_due();
            self.state.set_first_step(true);
        }
    }

    /// Debounce state of Button 1.
    pub fn button1_state(&self) -> ButtonState {
        self.debounce1.state()
    }

    /// Debounce state of Button 2.
    pub fn button2_state(&self) -> ButtonState {
        self.debounce2.state()
    }
}
