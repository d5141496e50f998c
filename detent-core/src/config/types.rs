//! Configuration types
//!
//! Defaults reproduce the reference wiring: encoder on GPIO2/GPIO3 with
//! pull-ups, an active-low button on GPIO4 and a MAX7219 chip select on
//! GPIO17.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::{ClockFace, FaceError, DEFAULT_MINUTES_PER_STEP};
use crate::encoder::Position;

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Pin string is not `[^][!]gpioN`
    InvalidPin,
    /// Clock face bounds are inconsistent
    InvalidFace(FaceError),
}

impl From<FaceError> for ConfigError {
    fn from(e: FaceError) -> Self {
        ConfigError::InvalidFace(e)
    }
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Input with the internal pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Active-low switch to ground with the internal pull-up enabled
    pub const fn active_low(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Encoder channel pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    pub pin_a: PinConfig,
    pub pin_b: PinConfig,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pin_a: PinConfig::with_pullup(2),
            pin_b: PinConfig::with_pullup(3),
        }
    }
}

/// Pushbutton pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    pub pin: PinConfig,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            pin: PinConfig::active_low(4),
        }
    }
}

/// Clock dial behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Position the counter holds at power-up
    pub initial_position: u8,
    /// Minutes per detent
    pub minutes_per_step: u8,
    /// Polling loop period
    pub poll_interval_ms: u32,
    pub face: ClockFace,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_position: 78,
            minutes_per_step: DEFAULT_MINUTES_PER_STEP,
            poll_interval_ms: 50,
            face: ClockFace::TWELVE_HOUR,
        }
    }
}

impl ClockConfig {
    pub const fn initial_position(&self) -> Position {
        Position::new(self.initial_position)
    }
}

/// MAX7219 display wiring
///
/// SCK and MOSI are fixed by the SPI0 pins on the board; only chip select
/// is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub cs_pin: PinConfig,
    /// Brightness, 0-15
    pub intensity: u8,
    pub frequency_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cs_pin: PinConfig::new(17),
            intensity: 4,
            frequency_hz: 1_000_000,
        }
    }
}

/// Complete dial configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialConfig {
    pub encoder: EncoderConfig,
    pub button: ButtonConfig,
    pub clock: ClockConfig,
    pub display: DisplayConfig,
}

impl DialConfig {
    /// Check cross-field constraints the parser cannot see line by line
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock.face.validate()?;

        if self.display.intensity > 15
            || self.clock.poll_interval_ms == 0
            || self.clock.minutes_per_step == 0
        {
            return Err(ConfigError::InvalidValue);
        }

        // Edge direction is fixed to rising, so channels cannot be inverted
        if self.encoder.pin_a.inverted || self.encoder.pin_b.inverted {
            return Err(ConfigError::InvalidPin);
        }

        let pins = [
            self.encoder.pin_a.pin,
            self.encoder.pin_b.pin,
            self.button.pin.pin,
            self.display.cs_pin.pin,
        ];
        for (i, pin) in pins.iter().enumerate() {
            if *pin > MAX_GPIO || pins[i + 1..].contains(pin) {
                return Err(ConfigError::InvalidPin);
            }
        }

        Ok(())
    }
}
