//! RP2040-specific HAL for the clock dial firmware
//!
//! Implements the `detent-hal` traits on top of embassy-rp:
//!
//! - Edge-waiting inputs and push-pull outputs
//! - Config-driven pin allocation (pins taken by number from `clock.toml`)
//! - Blocking transmit-only SPI for the segment display

#![no_std]

pub mod gpio;
pub mod pins;
pub mod spi;

pub use gpio::{RpInput, RpOutput};
pub use pins::{DialPeripherals, PinBank, PinError};
pub use spi::RpSpi;
