//! State shared between the edge tasks and the clock loop
//!
//! Writers go through critical sections inside `SharedEncoder` and
//! `ButtonMonitor`; the clock loop only reads.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use detent_core::button::ButtonMonitor;
use detent_core::encoder::{Position, SharedEncoder};

/// Quadrature decoder, reset to the configured position at startup
pub static ENCODER: SharedEncoder = SharedEncoder::new(Position::new(78));

/// Latest button level
pub static BUTTON: ButtonMonitor = ButtonMonitor::new();

/// Raised when a detent completes or the button changes, so the clock loop
/// can redraw before its next tick
pub static INPUT_ACTIVITY: Signal<CriticalSectionRawMutex, ()> = Signal::new();
