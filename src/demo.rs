//! Demo bring-up.

use crate::animator::Animator;
use crate::gpio::{Button, Led};
use crate::scanner::ButtonScanner;
use crate::state::SharedState;
use crate::timebase::Timebase;
use crate::types::SetupError;

/// The two halves of the assembled demo.
///
/// Hand the scanner to your timer interrupt and spin the animator on the
/// main context.
pub struct DemoParts<'s, L1: Led, L2: Led, B1: Button, B2: Button> {
    /// Main-loop side.
    pub animator: Animator<'s, L1, L2>,

    /// Interrupt side.
    pub scanner: ButtonScanner<'s, B1, B2>,
}

/// Assembles the demo: turns both LEDs off, arms the periodic timebase and
/// returns the two halves.
///
/// # Errors
/// [`SetupError::Timebase`] if the tick source cannot be armed. The demo has
/// no use without its timebase, so treat this as fatal.
pub fn bring_up<'s, L1, L2, B1, B2, T>(
    led1: L1,
    led2: L2,
    button1: B1,
    button2: B2,
    state: &'s SharedState,
    timebase: &mut T,
) -> Result<DemoParts<'s, L1, L2, B1, B2>, SetupError<T::Error>>
where
    L1: Led,
    L2: Led,
    B1: Button,
    B2: Button,
    T: Timebase,
{
    let animator = Animator::new(led1, led2, state);
    let scanner = ButtonScanner::new(button1, button2, state);

    timebase.start().map_err(SetupError::Timebase)?;

    Ok(DemoParts { animator, scanner })
}
