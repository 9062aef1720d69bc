//! GPIO capability traits for platform-agnostic line access.

/// Trait for abstracting a single LED output line.
///
/// Implement this for your LED hardware (GPIO, port output modification
/// register, etc.) to allow the animator to control it. The demo expects a
/// strong-drive push-pull output; configure that at startup. Handle any
/// hardware errors internally - this method cannot fail.
pub trait Led {
    /// Drives the line on or off.
    fn set(&mut self, on: bool);
}

/// Trait for abstracting a single button input line.
///
/// The scanner debounces for you; implementations just report the raw line
/// state. Board buttons are typically active-low, so translate the electrical
/// read into a plain "pressed" bool here.
pub trait Button {
    /// Returns true if the line currently reads as pressed.
    fn is_pressed(&self) -> bool;
}
