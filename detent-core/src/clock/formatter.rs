//! Hours and minutes from a clock position

use core::fmt::{self, Write};

use heapless::String;

use super::mapper::ClockPosition;

/// Minutes covered by one detent on the default face
pub const DEFAULT_MINUTES_PER_STEP: u8 = 5;

/// Capacity of a rendered `HH:MM` label
pub const LABEL_LEN: usize = 5;

/// Time of day shown on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoursMinutes {
    pub hours: u16,
    /// Always below 60
    pub minutes: u8,
}

impl HoursMinutes {
    /// The four display digits: hour tens, hour units, minute tens, minute units
    ///
    /// Hours above 99 only occur with a custom face and wide steps; the
    /// display keeps the last two hour digits.
    pub fn digits(&self) -> [u8; 4] {
        let hours = self.hours % 100;
        [
            (hours / 10) as u8,
            (hours % 10) as u8,
            self.minutes / 10,
            self.minutes % 10,
        ]
    }

    /// Render as `HH:MM` into a stack buffer
    pub fn label(&self) -> String<LABEL_LEN> {
        let mut label = String::new();
        // Five characters always fit
        let _ = write!(label, "{}", self);
        label
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h1, h0, m1, m0] = self.digits();
        write!(f, "{}{}:{}{}", h1, h0, m1, m0)
    }
}

/// Convert a clock position into hours and minutes
pub fn to_hours_minutes(position: ClockPosition, minutes_per_step: u8) -> HoursMinutes {
    let total = u16::from(position.steps()) * u16::from(minutes_per_step);
    HoursMinutes {
        hours: total / 60,
        minutes: (total % 60) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(steps: u8) -> HoursMinutes {
        to_hours_minutes(ClockPosition::new(steps), DEFAULT_MINUTES_PER_STEP)
    }

    #[test]
    fn test_half_past_six() {
        let time = at(78);
        assert_eq!(time, HoursMinutes { hours: 6, minutes: 30 });
        assert_eq!(time.digits(), [0, 6, 3, 0]);
        assert_eq!(time.label().as_str(), "06:30");
    }

    #[test]
    fn test_face_endpoints() {
        assert_eq!(at(12), HoursMinutes { hours: 1, minutes: 0 });
        assert_eq!(at(12).label().as_str(), "01:00");
        assert_eq!(at(155), HoursMinutes { hours: 12, minutes: 55 });
        assert_eq!(at(155).digits(), [1, 2, 5, 5]);
    }

    #[test]
    fn test_quarter_to_seven() {
        assert_eq!(at(81).label().as_str(), "06:45");
    }

    #[test]
    fn test_one_minute_steps() {
        let time = to_hours_minutes(ClockPosition::new(255), 1);
        assert_eq!(time, HoursMinutes { hours: 4, minutes: 15 });
    }

    #[test]
    fn test_wide_steps_keep_last_two_hour_digits() {
        // 255 * 60 minutes = 255 hours
        let time = to_hours_minutes(ClockPosition::new(255), 60);
        assert_eq!(time.hours, 255);
        assert_eq!(time.digits(), [5, 5, 0, 0]);
    }

    #[test]
    fn test_zero_minutes_per_step() {
        assert_eq!(
            to_hours_minutes(ClockPosition::new(100), 0),
            HoursMinutes { hours: 0, minutes: 0 }
        );
    }

    proptest! {
        #[test]
        fn prop_conversion_is_exact(steps in any::<u8>(), per_step in 1u8..=60) {
            let time = to_hours_minutes(ClockPosition::new(steps), per_step);
            prop_assert!(time.minutes < 60);
            prop_assert_eq!(
                u32::from(time.hours) * 60 + u32::from(time.minutes),
                u32::from(steps) * u32::from(per_step)
            );
        }

        #[test]
        fn prop_digits_are_decimal(steps in any::<u8>(), per_step in any::<u8>()) {
            let time = to_hours_minutes(ClockPosition::new(steps), per_step);
            for digit in time.digits() {
                prop_assert!(digit <= 9);
            }
            prop_assert_eq!(time.label().len(), LABEL_LEN);
        }
    }
}
