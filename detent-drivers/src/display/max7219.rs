//! MAX7219 seven-segment driver
//!
//! Runs the chip in code-B decode mode on four digits, so each digit
//! register takes a plain 0-9 value. The hours/minutes separator is the
//! decimal point of digit 1. Digit position 0 is wired to DIG0.
//!
//! Every register write is one 16-bit frame (address, data) clocked in with
//! chip select low; the chip latches it on the rising edge of CS.

use detent_core::traits::{DisplaySink, DIGIT_COUNT};
use detent_hal::{OutputPin, SpiBus};

/// Register addresses
pub mod reg {
    /// DIG0; DIG1-DIG7 follow consecutively
    pub const DIGIT0: u8 = 0x01;
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Code-B character for a blank digit
pub const CODE_B_BLANK: u8 = 0x0F;

/// Decimal point bit in a digit register
pub const DECIMAL_POINT: u8 = 0x80;

/// Digit whose decimal point acts as the separator
pub const SEPARATOR_DIGIT: u8 = 1;

/// Highest intensity setting
pub const MAX_INTENSITY: u8 = 0x0F;

/// MAX7219 driving a four digit clock display
pub struct Max7219<SPI, CS> {
    spi: SPI,
    cs: CS,
    digits: [u8; DIGIT_COUNT as usize],
    separator: bool,
    failed_writes: u32,
}

impl<SPI: SpiBus, CS: OutputPin> Max7219<SPI, CS> {
    /// Create the driver with chip select released
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            digits: [CODE_B_BLANK; DIGIT_COUNT as usize],
            separator: false,
            failed_writes: 0,
        }
    }

    /// Configure the chip and bring it out of shutdown with all digits blank
    ///
    /// `intensity` is clamped to 0-15.
    pub fn init(&mut self, intensity: u8) -> Result<(), SPI::Error> {
        self.write_register(reg::DISPLAY_TEST, 0)?;
        self.write_register(reg::SCAN_LIMIT, DIGIT_COUNT - 1)?;
        // Code-B decode on digits 0-3
        self.write_register(reg::DECODE_MODE, 0x0F)?;
        self.write_register(reg::INTENSITY, intensity.min(MAX_INTENSITY))?;

        self.digits = [CODE_B_BLANK; DIGIT_COUNT as usize];
        self.separator = false;
        for position in 0..DIGIT_COUNT {
            self.write_register(reg::DIGIT0 + position, CODE_B_BLANK)?;
        }

        self.write_register(reg::SHUTDOWN, 1)
    }

    /// Number of digit writes the bus rejected since creation
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    fn write_register(&mut self, register: u8, data: u8) -> Result<(), SPI::Error> {
        self.cs.set_low();
        let result = self.spi.write(&[register, data]);
        self.cs.set_high();
        result
    }

    fn flush_digit(&mut self, position: u8) {
        let mut data = self.digits[position as usize];
        if position == SEPARATOR_DIGIT && self.separator {
            data |= DECIMAL_POINT;
        }

        if self.write_register(reg::DIGIT0 + position, data).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
        }
    }
}

impl<SPI: SpiBus, CS: OutputPin> DisplaySink for Max7219<SPI, CS> {
    /// Values above 9 blank the digit; positions past the last digit are
    /// ignored.
    fn set_digit(&mut self, position: u8, value: u8) {
        if position >= DIGIT_COUNT {
            return;
        }

        self.digits[position as usize] = if value <= 9 { value } else { CODE_B_BLANK };
        self.flush_digit(position);
    }

    fn set_separator(&mut self, enabled: bool) {
        self.separator = enabled;
        self.flush_digit(SEPARATOR_DIGIT);
    }
}
