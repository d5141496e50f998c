//! Display sink trait for the four digit clock display

use crate::clock::HoursMinutes;

/// Number of digits on the clock display
pub const DIGIT_COUNT: u8 = 4;

/// Write-only numeric display
///
/// The dial never reads anything back and has nothing useful to do with a
/// failed write, so the methods are infallible. Drivers that talk to a real
/// bus absorb and count their own errors.
pub trait DisplaySink {
    /// Show `value` (0-9) at digit `position` (0-3, left to right)
    fn set_digit(&mut self, position: u8, value: u8);

    /// Turn the hours/minutes separator on or off
    fn set_separator(&mut self, enabled: bool);
}

/// Helper for rendering a whole time at once
pub trait DisplaySinkExt: DisplaySink {
    /// Write all four digits of `time` and light the separator
    fn show_time(&mut self, time: &HoursMinutes) {
        for (position, value) in (0..DIGIT_COUNT).zip(time.digits()) {
            self.set_digit(position, value);
        }
        self.set_separator(true);
    }
}

// Blanket implementation for all DisplaySink types
impl<T: DisplaySink + ?Sized> DisplaySinkExt for T {}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn set_digit(&mut self, position: u8, value: u8) {
        (**self).set_digit(position, value)
    }

    fn set_separator(&mut self, enabled: bool) {
        (**self).set_separator(enabled)
    }
}
