//! Encoder and button inputs

use detent_core::encoder::ChannelLevels;
use detent_core::traits::{ButtonSampler, ChannelReader};
use detent_hal::InputPin;

/// The two encoder channels
///
/// Fields are public so the firmware can await edges on each pin while the
/// pair is still usable as a [`ChannelReader`].
pub struct QuadraturePins<A, B> {
    pub a: A,
    pub b: B,
}

impl<A: InputPin, B: InputPin> QuadraturePins<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: InputPin, B: InputPin> ChannelReader for QuadraturePins<A, B> {
    fn read_levels(&self) -> ChannelLevels {
        // Back to back so both reads describe the same moment
        let a = self.a.is_high();
        let b = self.b.is_high();
        ChannelLevels::new(a, b)
    }
}

/// Pushbutton input
pub struct ButtonPin<P> {
    pin: P,
    /// If true, pressed = pin LOW
    inverted: bool,
}

impl<P: InputPin> ButtonPin<P> {
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Button that pulls the pin low when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<P: InputPin> ButtonSampler for ButtonPin<P> {
    fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use detent_core::button::ButtonMonitor;
    use detent_core::encoder::{Channel, Position, SharedEncoder};

    struct MockPin {
        high: Cell<bool>,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self {
                high: Cell::new(high),
            }
        }

        fn set(&self, high: bool) {
            self.high.set(high);
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[test]
    fn test_read_levels() {
        let pins = QuadraturePins::new(MockPin::new(true), MockPin::new(false));
        assert_eq!(pins.read_levels(), ChannelLevels::new(true, false));

        pins.b.set(true);
        assert_eq!(pins.read_levels(), ChannelLevels::new(true, true));
    }

    #[test]
    fn test_detent_through_pins() {
        let encoder = SharedEncoder::new(Position::new(78));
        let pins = QuadraturePins::new(MockPin::new(false), MockPin::new(false));

        // Clockwise: A rises first, then B
        pins.a.set(true);
        encoder.on_rising_edge(Channel::A, &pins);
        pins.b.set(true);
        encoder.on_rising_edge(Channel::B, &pins);
        assert_eq!(encoder.position(), Position::new(79));

        // Both fall back to rest, then counter-clockwise: B first
        pins.a.set(false);
        pins.b.set(false);
        pins.b.set(true);
        encoder.on_rising_edge(Channel::B, &pins);
        pins.a.set(true);
        encoder.on_rising_edge(Channel::A, &pins);
        assert_eq!(encoder.position(), Position::new(78));
    }

    #[test]
    fn test_active_low_button() {
        let button = ButtonPin::new_active_low(MockPin::new(true));
        assert!(!button.is_pressed());

        button.pin.set(false);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_high_button() {
        let button = ButtonPin::new(MockPin::new(false), false);
        assert!(!button.is_pressed());

        button.pin.set(true);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_button_feeds_monitor() {
        let monitor = ButtonMonitor::new();
        let button = ButtonPin::new_active_low(MockPin::new(true));

        button.pin.set(false);
        monitor.on_level_change(&button);
        assert_eq!(monitor.take_change(), Some(true));

        button.pin.set(true);
        monitor.on_level_change(&button);
        assert_eq!(monitor.take_change(), Some(false));
    }
}
