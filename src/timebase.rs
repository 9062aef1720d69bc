//! Periodic tick source abstraction.

/// Tick period the debounce and animation timing is calibrated for.
pub const TICK_PERIOD_MS: u32 = 10;

/// Trait for abstracting the periodic tick source.
///
/// Implement this over your hardware timer (SysTick, a general-purpose timer
/// channel, etc.). The demo arms it exactly once at startup and expects the
/// callback to fire every [`TICK_PERIOD_MS`] milliseconds from then on,
/// invoking [`ButtonScanner::poll`](crate::ButtonScanner::poll).
pub trait Timebase {
    /// Error reported when the tick source cannot be armed.
    type Error;

    /// Arms the periodic callback.
    fn start(&mut self) -> Result<(), Self::Error>;
}
