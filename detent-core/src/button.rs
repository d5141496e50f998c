//! Pushbutton level monitor
//!
//! The edge handler re-samples the button on every transition and stores
//! the level; the polling loop reads it back once per iteration. Both
//! values are single booleans so the reader needs no lock.

use portable_atomic::{AtomicBool, Ordering};

use crate::traits::ButtonSampler;

/// Latest button level plus a "changed since last poll" marker
pub struct ButtonMonitor {
    pressed: AtomicBool,
    changed: AtomicBool,
}

impl Default for ButtonMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonMonitor {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
            changed: AtomicBool::new(false),
        }
    }

    /// Edge handler body, called on both rising and falling edges
    ///
    /// Returns the sampled level.
    pub fn on_level_change<S: ButtonSampler + ?Sized>(&self, sampler: &S) -> bool {
        critical_section::with(|_| {
            let pressed = sampler.is_pressed();
            if self.pressed.swap(pressed, Ordering::AcqRel) != pressed {
                self.changed.store(true, Ordering::Release);
            }
            pressed
        })
    }

    /// Last stored level
    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// The stored level if it changed since the previous call
    ///
    /// A press and release that both land between two polls report the
    /// final level, so the press itself is lost.
    pub fn take_change(&self) -> Option<bool> {
        if self.changed.swap(false, Ordering::AcqRel) {
            Some(self.is_pressed())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockButton {
        pressed: Cell<bool>,
    }

    impl MockButton {
        fn new() -> Self {
            Self {
                pressed: Cell::new(false),
            }
        }

        fn set(&self, pressed: bool) {
            self.pressed.set(pressed);
        }
    }

    impl ButtonSampler for MockButton {
        fn is_pressed(&self) -> bool {
            self.pressed.get()
        }
    }

    static BUTTON: ButtonMonitor = ButtonMonitor::new();

    #[test]
    fn test_static_monitor_starts_released() {
        assert!(!BUTTON.is_pressed());
        assert_eq!(BUTTON.take_change(), None);
    }

    #[test]
    fn test_press_and_release() {
        let monitor = ButtonMonitor::new();
        let button = MockButton::new();

        button.set(true);
        assert!(monitor.on_level_change(&button));
        assert!(monitor.is_pressed());
        assert_eq!(monitor.take_change(), Some(true));
        assert_eq!(monitor.take_change(), None);

        button.set(false);
        assert!(!monitor.on_level_change(&button));
        assert!(!monitor.is_pressed());
        assert_eq!(monitor.take_change(), Some(false));
    }

    #[test]
    fn test_bounce_on_same_level_is_not_a_change() {
        let monitor = ButtonMonitor::new();
        let button = MockButton::new();

        // Spurious edge while still released
        monitor.on_level_change(&button);
        assert_eq!(monitor.take_change(), None);

        button.set(true);
        monitor.on_level_change(&button);
        monitor.on_level_change(&button);
        assert_eq!(monitor.take_change(), Some(true));
    }

    #[test]
    fn test_latest_level_wins_between_polls() {
        let monitor = ButtonMonitor::new();
        let button = MockButton::new();

        button.set(true);
        monitor.on_level_change(&button);
        button.set(false);
        monitor.on_level_change(&button);
        button.set(true);
        monitor.on_level_change(&button);

        assert_eq!(monitor.take_change(), Some(true));
    }
}
