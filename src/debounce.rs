//! Three-state button debouncing.

use crate::types::ButtonState;

/// Debounces a single button sampled on the periodic tick.
///
/// An active sample walks the state `Released` → `Pressed` → `Done`;
/// [`sample`](Debouncer::sample) returns true exactly on the
/// `Pressed` → `Done` transition, so a held button fires its action once.
/// Any inactive sample resets to `Released` regardless of prior state.
///
/// Two consecutive 10 ms samples must read active before an action fires,
/// which filters contact bounce shorter than one tick. There is no further
/// minimum-hold guarantee.
#[derive(Debug, Default)]
pub struct Debouncer {
    state: ButtonState,
}

impl Debouncer {
    /// Creates a debouncer in the `Released` state.
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Released,
        }
    }

    /// Feeds one tick's sample. Returns true if the button's action should
    /// fire now.
    pub fn sample(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.state = ButtonState::Released;
            return false;
        }

        match self.state {
            ButtonState::Released => {
                self.state = ButtonState::Pressed;
                false
            }
            ButtonState::Pressed => {
                self.state = ButtonState::Done;
                true
            }
            ButtonState::Done => false,
        }
    }

    /// Current debounce state.
    pub fn state(&self) -> ButtonState {
        self.state
    }
}
