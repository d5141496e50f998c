//! Pin allocation for config-driven hardware setup
//!
//! Pin numbers come from `clock.toml`, so GPIOs are handed out by number at
//! runtime. GPIO18 and GPIO19 carry the SPI0 clock and data lines to the
//! display; they are split off with their concrete types and reported as
//! reserved by the bank.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_18, PIN_19, SPI0};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// SPI0 clock to the display
pub const SPI_SCK_PIN: u8 = 18;

/// SPI0 data to the display
pub const SPI_MOSI_PIN: u8 = 19;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin is wired to the display bus
    Reserved,
}

/// Bank of GPIO pins that can be taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

/// Everything the dial uses, split out of the embassy peripherals
pub struct DialPeripherals {
    pub pins: PinBank,
    pub spi0: Peri<'static, SPI0>,
    pub spi_sck: Peri<'static, PIN_18>,
    pub spi_mosi: Peri<'static, PIN_19>,
}

impl DialPeripherals {
    pub fn split(p: Peripherals) -> Self {
        let pins = PinBank {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                None,
                None,
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };

        Self {
            pins,
            spi0: p.SPI0,
            spi_sck: p.PIN_18,
            spi_mosi: p.PIN_19,
        }
    }
}

impl PinBank {
    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        check_pin(pin_num)?;
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// Validate a pin number against the board layout
pub fn check_pin(pin_num: u8) -> Result<(), PinError> {
    if pin_num >= GPIO_COUNT {
        Err(PinError::InvalidPin)
    } else if pin_num == SPI_SCK_PIN || pin_num == SPI_MOSI_PIN {
        Err(PinError::Reserved)
    } else {
        Ok(())
    }
}
