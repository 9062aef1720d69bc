//! Core types for the demo state machine.

/// Top-level application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMode {
    /// Blink patterns animated once per second.
    #[default]
    Run,

    /// LED outputs driven directly by the run-mode bitmask.
    Control,
}

impl AppMode {
    /// Returns the next mode in the cycle (modulo 2).
    pub fn next(self) -> Self {
        match self {
            AppMode::Run => AppMode::Control,
            AppMode::Control => AppMode::Run,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw % 2 {
            0 => AppMode::Run,
            _ => AppMode::Control,
        }
    }
}

/// Selects which blink pattern is animated in [`AppMode::Run`], or which LED
/// bits are forced on in [`AppMode::Control`].
///
/// The discriminant doubles as a 2-bit mask in control mode: bit 0 drives
/// LED1, bit 1 drives LED2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// LED1 blinks, LED2 stays off.
    #[default]
    Led1Blink = 0,

    /// LED2 blinks, LED1 stays off.
    Led2Blink = 1,

    /// Both LEDs blink in unison.
    Led12Blink = 2,

    /// The two LEDs blink alternately.
    Led12AltBlink = 3,
}

impl RunMode {
    /// Returns the next mode in the cycle (modulo 4).
    pub fn next(self) -> Self {
        match self {
            RunMode::Led1Blink => RunMode::Led2Blink,
            RunMode::Led2Blink => RunMode::Led12Blink,
            RunMode::Led12Blink => RunMode::Led12AltBlink,
            RunMode::Led12AltBlink => RunMode::Led1Blink,
        }
    }

    /// True if bit 0 of the mask reading is set (drives LED1 in control mode).
    pub fn bit0(self) -> bool {
        (self as u8) & 1 != 0
    }

    /// True if bit 1 of the mask reading is set (drives LED2 in control mode).
    pub fn bit1(self) -> bool {
        (self as u8) & 2 != 0
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw % 4 {
            0 => RunMode::Led1Blink,
            1 => RunMode::Led2Blink,
            2 => RunMode::Led12Blink,
            _ => RunMode::Led12AltBlink,
        }
    }
}

/// Debounce state of a single button.
///
/// A press walks `Released` → `Pressed` → `Done`; the button's action fires
/// exactly on the `Pressed` → `Done` transition. `Done` persists while the
/// button is held, and any inactive sample resets to `Released`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Line inactive.
    #[default]
    Released,

    /// First active sample seen.
    Pressed,

    /// Action fired; waiting for release.
    Done,
}

/// The on/off state of both LED lines produced by one rendered step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedFrame {
    /// LED1 output.
    pub led1: bool,

    /// LED2 output.
    pub led2: bool,
}

impl LedFrame {
    /// Both LEDs off.
    pub const OFF: Self = Self {
        led1: false,
        led2: false,
    };

    /// Creates a frame from explicit LED states.
    #[inline]
    pub const fn new(led1: bool, led2: bool) -> Self {
        Self { led1, led2 }
    }
}

/// Bring-up errors.
///
/// The demo has no use without its timebase, so callers should treat any of
/// these as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError<E> {
    /// The periodic tick source could not be armed.
    Timebase(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for SetupError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::Timebase(e) => {
                write!(f, "failed to arm the periodic timebase: {:?}", e)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for SetupError<E> {}
