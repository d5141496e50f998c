//! Board bring-up
//!
//! Turns the parsed configuration into concrete pins and the display bus.

use defmt::*;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::Spi;
use embassy_rp::Peripherals;

use detent_core::config::DialConfig;
use detent_drivers::display::Max7219;
use detent_drivers::input::{ButtonPin, QuadraturePins};
use detent_hal::spi::{Mode, SpiConfig};
use detent_hal_rp2040::spi::spi_config;
use detent_hal_rp2040::{DialPeripherals, PinError, RpInput, RpOutput, RpSpi};

pub type EncoderPins = QuadraturePins<RpInput<'static>, RpInput<'static>>;
pub type Button = ButtonPin<RpInput<'static>>;
pub type Display = Max7219<RpSpi<'static, SPI0>, RpOutput<'static>>;

/// Hardware handed to the tasks
pub struct Board {
    pub encoder: EncoderPins,
    pub button: Button,
    pub display: Display,
}

impl Board {
    pub fn init(p: Peripherals, config: &DialConfig) -> Result<Self, PinError> {
        let DialPeripherals {
            mut pins,
            spi0,
            spi_sck,
            spi_mosi,
        } = DialPeripherals::split(p);

        let encoder = QuadraturePins::new(
            RpInput::new(pins.take(config.encoder.pin_a.pin)?, &config.encoder.pin_a),
            RpInput::new(pins.take(config.encoder.pin_b.pin)?, &config.encoder.pin_b),
        );
        info!("Encoder pins ready");

        let button = ButtonPin::new(
            RpInput::new(pins.take(config.button.pin.pin)?, &config.button.pin),
            config.button.pin.inverted,
        );

        // MAX7219 samples DIN on the rising clock edge (mode 0)
        let bus = SpiConfig::new(config.display.frequency_hz, Mode::Mode0);
        let spi = Spi::new_blocking_txonly(spi0, spi_sck, spi_mosi, spi_config(&bus));
        let cs = RpOutput::new(pins.take(config.display.cs_pin.pin)?, true);
        let display = Max7219::new(RpSpi::new(spi), cs);
        info!("Display bus ready at {} Hz", bus.frequency);

        Ok(Self {
            encoder,
            button,
            display,
        })
    }
}
