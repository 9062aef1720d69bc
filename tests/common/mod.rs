//! Shared test infrastructure for duo-blink integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use duo_blink::{Animator, Button, ButtonScanner, Led, LedFrame, Timebase};

// ============================================================================
// Mock GPIO
// ============================================================================

/// Mock LED that mirrors its drive level into a shared `Cell`, so tests can
/// observe the line after the LED has been moved into the animator.
pub struct MockLed<'a> {
    line: &'a Cell<bool>,
}

impl<'a> MockLed<'a> {
    pub fn new(line: &'a Cell<bool>) -> Self {
        Self { line }
    }
}

impl Led for MockLed<'_> {
    fn set(&mut self, on: bool) {
        self.line.set(on);
    }
}

/// Mock button whose level is scripted through a shared `Cell`.
pub struct MockButton<'a> {
    line: &'a Cell<bool>,
}

impl<'a> MockButton<'a> {
    pub fn new(line: &'a Cell<bool>) -> Self {
        Self { line }
    }
}

impl Button for MockButton<'_> {
    fn is_pressed(&self) -> bool {
        self.line.get()
    }
}

// ============================================================================
// Mock Timebase
// ============================================================================

/// Mock tick source that records arming and can be scripted to fail.
pub struct MockTimebase {
    pub fail: bool,
    pub started: bool,
}

impl MockTimebase {
    pub fn new() -> Self {
        Self {
            fail: false,
            started: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            started: false,
        }
    }
}

impl Timebase for MockTimebase {
    type Error = &'static str;

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err("tick source unavailable");
        }
        self.started = true;
        Ok(())
    }
}

// ============================================================================
// Harness Helpers
// ============================================================================

/// Runs `n` ticks: one scanner poll followed by one animator step each,
/// the way the timer interrupt interleaves with the busy loop. Returns the
/// last frame the animator rendered, if any.
pub fn run_ticks<L1, L2, B1, B2>(
    scanner: &mut ButtonScanner<B1, B2>,
    animator: &mut Animator<L1, L2>,
    n: u32,
) -> Option<LedFrame>
where
    L1: Led,
    L2: Led,
    B1: Button,
    B2: Button,
{
    let mut last = None;
    for _ in 0..n {
        scanner.poll();
        if let Some(frame) = animator.step() {
            last = Some(frame);
        }
    }
    last
}

/// Like [`run_ticks`], but collects every rendered frame in order.
pub fn collect_frames<L1, L2, B1, B2>(
    scanner: &mut ButtonScanner<B1, B2>,
    animator: &mut Animator<L1, L2>,
    n: u32,
) -> heapless::Vec<LedFrame, 64>
where
    L1: Led,
    L2: Led,
    B1: Button,
    B2: Button,
{
    let mut frames = heapless::Vec::new();
    for _ in 0..n {
        scanner.poll();
        if let Some(frame) = animator.step() {
            let _ = frames.push(frame);
        }
    }
    frames
}
