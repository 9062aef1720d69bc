#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AppMode`**: Top-level mode, either animated (`Run`) or direct bitmask output (`Control`)
//! - **`RunMode`**: Selects one of four blink patterns, doubling as a 2-bit LED mask in `Control`
//! - **`LedFrame`**: The on/off state of both LEDs produced by one rendered step
//! - **`SharedState`**: Atomic state bridging the timer interrupt and the main loop
//! - **`Debouncer`**: Three-state press/acknowledge machine for a single button
//! - **`ButtonScanner`**: Interrupt-side tick body; samples both buttons and applies actions
//! - **`Animator`**: Main-loop side; maps the shared state onto the two LED lines
//! - **`Led` / `Button`**: Traits to implement for your GPIO hardware
//! - **`Timebase`**: Trait to implement for your periodic 10 ms tick source
//!
//! All decision logic is pure over the shared state, so the full state machine
//! runs on a host under `cargo test` with mock GPIO. On hardware, implement the
//! three traits over your HAL, call [`ButtonScanner::poll`] from the timer
//! interrupt and spin [`Animator::run`] on the main context.

pub mod animator;
pub mod debounce;
pub mod demo;
pub mod gpio;
pub mod scanner;
pub mod state;
pub mod timebase;
pub mod types;

pub use animator::{Animator, animation_frame, control_frame};
pub use debounce::Debouncer;
pub use demo::{DemoParts, bring_up};
pub use gpio::{Button, Led};
pub use scanner::ButtonScanner;
pub use state::{STEP_TICKS, SharedState};
pub use timebase::{TICK_PERIOD_MS, Timebase};
pub use types::{AppMode, ButtonState, LedFrame, RunMode, SetupError};
