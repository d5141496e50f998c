//! Line-based parser for `clock.toml`
//!
//! Handles only the subset of TOML the dial configuration uses:
//! - `[section]` and `[section.subsection]` headers
//! - `key = value` pairs (quoted or bare strings, integers)
//! - Comments (`# ...`), including trailing ones
//!
//! Unknown keys are skipped so older firmware accepts newer files; unknown
//! sections are rejected.

use heapless::String;

use super::types::{ConfigError, DialConfig, PinConfig, MAX_GPIO};

/// Longest integer literal accepted, separators excluded
const MAX_INT_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Encoder,
    Button,
    Clock,
    ClockFace,
    Display,
}

/// Parse `clock.toml` into a validated configuration
///
/// Anything not mentioned in the input keeps its default.
pub fn parse_config(input: &str) -> Result<DialConfig, ConfigError> {
    let mut config = DialConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ConfigError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let Some((key, value)) = parse_key_value(line) else {
            return Err(ConfigError::InvalidValue);
        };
        apply_value(&mut config, section, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "encoder" => Ok(Section::Encoder),
        "button" => Ok(Section::Button),
        "clock" => Ok(Section::Clock),
        "clock.face" => Ok(Section::ClockFace),
        "display" => Ok(Section::Display),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_value(
    config: &mut DialConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => {}
        Section::Encoder => match key {
            "pin_a" => config.encoder.pin_a = parse_pin(value)?,
            "pin_b" => config.encoder.pin_b = parse_pin(value)?,
            _ => {}
        },
        Section::Button => {
            if key == "pin" {
                config.button.pin = parse_pin(value)?;
            }
        }
        Section::Clock => match key {
            "initial_position" => config.clock.initial_position = parse_int(value)?,
            "minutes_per_step" => config.clock.minutes_per_step = parse_int(value)?,
            "poll_interval_ms" => config.clock.poll_interval_ms = parse_int(value)?,
            _ => {}
        },
        Section::ClockFace => {
            let face = &mut config.clock.face;
            match key {
                "upper_bound" => face.upper_bound = parse_int(value)?,
                "lower_reentry" => face.lower_reentry = parse_int(value)?,
                "lower_bound" => face.lower_bound = parse_int(value)?,
                "upper_reentry" => face.upper_reentry = parse_int(value)?,
                _ => {}
            }
        }
        Section::Display => match key {
            "cs_pin" => config.display.cs_pin = parse_pin(value)?,
            "intensity" => config.display.intensity = parse_int(value)?,
            "frequency_hz" => config.display.frequency_hz = parse_int(value)?,
            _ => {}
        },
    }
    Ok(())
}

fn strip_comment(value: &str) -> &str {
    match value.find('#') {
        // Only strip when the # is not inside a string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Unquoted strings are accepted for simple values
        value
    }
}

/// Integers accept TOML digit separators (`1_000_000`)
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    let mut digits: String<MAX_INT_LEN> = String::new();
    for c in value.chars().filter(|c| *c != '_') {
        digits.push(c).map_err(|_| ConfigError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse `"[^][!]gpioN"`: `^` enables the pull-up, `!` marks the pin
/// active-low
pub fn parse_pin(value: &str) -> Result<PinConfig, ConfigError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull_up = false;

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let number = s.strip_prefix("gpio").ok_or(ConfigError::InvalidPin)?;
    let pin: u8 = number.parse().map_err(|_| ConfigError::InvalidPin)?;
    if pin > MAX_GPIO {
        return Err(ConfigError::InvalidPin);
    }

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ClockFace, FaceError};

    #[test]
    fn test_parse_pin() {
        let pin = parse_pin("gpio11").unwrap();
        assert_eq!(pin, PinConfig::new(11));

        let pin = parse_pin("^gpio2").unwrap();
        assert_eq!(pin, PinConfig::with_pullup(2));

        let pin = parse_pin("\"^!gpio4\"").unwrap();
        assert_eq!(pin, PinConfig::active_low(4));

        let pin = parse_pin("!^gpio4").unwrap();
        assert_eq!(pin, PinConfig::active_low(4));
    }

    #[test]
    fn test_parse_pin_errors() {
        assert_eq!(parse_pin("pin4"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin("gpio"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin("gpio30"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin("^gpio-1"), Err(ConfigError::InvalidPin));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a = 1"), Some(("a", "1")));
        assert_eq!(parse_key_value("pin = \"gpio4\" # button"), Some(("pin", "\"gpio4\"")));
        assert_eq!(parse_key_value("a = \"x#y\""), Some(("a", "\"x#y\"")));
        assert_eq!(parse_key_value("a ="), None);
        assert_eq!(parse_key_value("no equals"), None);
    }

    #[test]
    fn test_parse_int_separators() {
        assert_eq!(parse_int::<u32>("1_000_000"), Ok(1_000_000));
        assert_eq!(parse_int::<u8>("256"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_int::<u8>("x"), Err(ConfigError::InvalidValue));
        assert_eq!(
            parse_int::<u32>("1234567890123"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(DialConfig::default()));
        assert_eq!(parse_config("# only a comment\n\n"), Ok(DialConfig::default()));
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Dial on the breadboard
[encoder]
pin_a = "^gpio6"
pin_b = "^gpio7"

[button]
pin = "^!gpio8"

[clock]
initial_position = 100
minutes_per_step = 5
poll_interval_ms = 20

[clock.face]
upper_bound = 156
lower_reentry = 12
lower_bound = 11
upper_reentry = 155

[display]
cs_pin = "gpio13"  # SPI1 CSn
intensity = 9
frequency_hz = 2_000_000
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.encoder.pin_a, PinConfig::with_pullup(6));
        assert_eq!(config.encoder.pin_b, PinConfig::with_pullup(7));
        assert_eq!(config.button.pin, PinConfig::active_low(8));
        assert_eq!(config.clock.initial_position, 100);
        assert_eq!(config.clock.poll_interval_ms, 20);
        assert_eq!(config.clock.face, ClockFace::TWELVE_HOUR);
        assert_eq!(config.display.cs_pin, PinConfig::new(13));
        assert_eq!(config.display.intensity, 9);
        assert_eq!(config.display.frequency_hz, 2_000_000);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[clock]\ncolour = \"red\"\nminutes_per_step = 1\n").unwrap();
        assert_eq!(config.clock.minutes_per_step, 1);
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[stepper spin]\nstep_pin = \"gpio11\"\n"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(parse_config("[clock\n"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            parse_config("[clock]\ninitial_position = 300\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[encoder]\npin_a = \"gpo2\"\n"),
            Err(ConfigError::InvalidPin)
        );
        assert_eq!(parse_config("[clock]\njunk\n"), Err(ConfigError::InvalidValue));
        assert_eq!(
            parse_config("[clock]\nminutes_per_step = 0\n"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_inconsistent_face_rejected() {
        let config_str = "[clock.face]\nlower_bound = 100\n";
        assert_eq!(
            parse_config(config_str),
            Err(ConfigError::InvalidFace(FaceError::ReentryOutOfRange))
        );

        let config_str = "[clock.face]\nupper_bound = 12\n";
        assert_eq!(
            parse_config(config_str),
            Err(ConfigError::InvalidFace(FaceError::EmptyRange))
        );
    }

    #[test]
    fn test_shared_pin_rejected() {
        let config_str = "[button]\npin = \"^!gpio2\"\n";
        assert_eq!(parse_config(config_str), Err(ConfigError::InvalidPin));
    }
}
