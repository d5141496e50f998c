//! Configuration loading
//!
//! The configuration is compiled in from `clock.toml`; build.rs has already
//! validated it on the host, so the fallback only triggers when the two
//! parsers disagree.

use defmt::*;

use detent_core::config::{parse_config, ConfigError, DialConfig};
use detent_hal_rp2040::pins::check_pin;

/// Embedded configuration
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clock.toml");

/// Parse the embedded configuration, falling back to defaults on error
pub fn load_config() -> DialConfig {
    let config = match parse_config(EMBEDDED_CONFIG).and_then(check_board_pins) {
        Ok(config) => {
            info!("Loaded clock.toml");
            config
        }
        Err(e) => {
            warn!("Invalid clock.toml ({}), using defaults", e);
            DialConfig::default()
        }
    };

    log_config(&config);
    config
}

/// Reject pins the board uses for the display bus
fn check_board_pins(config: DialConfig) -> Result<DialConfig, ConfigError> {
    let pins = [
        config.encoder.pin_a,
        config.encoder.pin_b,
        config.button.pin,
        config.display.cs_pin,
    ];
    for pin in pins {
        check_pin(pin.pin).map_err(|_| ConfigError::InvalidPin)?;
    }
    Ok(config)
}

fn log_config(config: &DialConfig) {
    info!(
        "Encoder: A=gpio{} B=gpio{} pull_up={}/{}",
        config.encoder.pin_a.pin,
        config.encoder.pin_b.pin,
        config.encoder.pin_a.pull_up,
        config.encoder.pin_b.pull_up
    );
    info!(
        "Button: gpio{} active_low={}",
        config.button.pin.pin, config.button.pin.inverted
    );

    let face = &config.clock.face;
    info!(
        "Clock: start={} {}min/step, face {}..={} (wrap {}->{}, {}->{}), poll {}ms",
        config.clock.initial_position,
        config.clock.minutes_per_step,
        face.lower_bound + 1,
        face.upper_bound - 1,
        face.upper_bound,
        face.lower_reentry,
        face.lower_bound,
        face.upper_reentry,
        config.clock.poll_interval_ms
    );
    info!(
        "Display: MAX7219 cs=gpio{} intensity={} {}Hz",
        config.display.cs_pin.pin, config.display.intensity, config.display.frequency_hz
    );
}
