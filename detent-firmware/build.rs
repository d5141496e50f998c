//! Build script for detent-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs wired to the display bus
const RESERVED_PINS: [i64; 2] = [18, 19];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(
            "Failed to read clock.toml",
            &[format!("{}", e), "The firmware embeds clock.toml at build time".into()],
        ),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in clock.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    for section in ["encoder", "button", "clock"] {
        if config.get(section).is_none() {
            errors.push(format!("Missing [{}] section", section));
        }
    }

    let pins = [
        ("encoder", "pin_a"),
        ("encoder", "pin_b"),
        ("button", "pin"),
        ("display", "cs_pin"),
    ];
    let mut used = Vec::new();
    for (section, key) in pins {
        let Some(value) = config.get(section).and_then(|s| s.get(key)) else {
            continue;
        };
        match value.as_str().and_then(parse_pin) {
            Some((pin, inverted)) => {
                if RESERVED_PINS.contains(&pin) {
                    errors.push(format!("[{}] {} uses gpio{}, reserved for SPI0", section, key, pin));
                }
                if used.contains(&pin) {
                    errors.push(format!("[{}] {} reuses gpio{}", section, key, pin));
                }
                if section == "encoder" && inverted {
                    errors.push(format!("[encoder] {} cannot be inverted", key));
                }
                used.push(pin);
            }
            None => errors.push(format!(
                "[{}] {} must look like \"^!gpioN\" with N in 0-29",
                section, key
            )),
        }
    }

    if let Some(clock) = config.get("clock") {
        check_range(&mut errors, clock, "clock", "initial_position", 0, 255);
        check_range(&mut errors, clock, "clock", "minutes_per_step", 1, 255);
        check_range(&mut errors, clock, "clock", "poll_interval_ms", 1, u32::MAX as i64);
        if let Some(face) = clock.get("face") {
            validate_face(&mut errors, face);
        }
    }

    if let Some(display) = config.get("display") {
        check_range(&mut errors, display, "display", "intensity", 0, 15);
    }

    if !errors.is_empty() {
        fail("Invalid clock.toml", &errors);
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Face bounds must leave a band that holds both reentry points
fn validate_face(errors: &mut Vec<String>, face: &toml::Value) {
    let get = |key: &str, default: i64| face.get(key).and_then(|v| v.as_integer()).unwrap_or(default);
    let upper_bound = get("upper_bound", 156);
    let lower_reentry = get("lower_reentry", 12);
    let lower_bound = get("lower_bound", 11);
    let upper_reentry = get("upper_reentry", 155);

    for key in ["upper_bound", "lower_reentry", "lower_bound", "upper_reentry"] {
        check_range(errors, face, "clock.face", key, 0, 255);
    }

    if lower_bound + 2 > upper_bound {
        errors.push("[clock.face] lower_bound must be at least 2 below upper_bound".into());
        return;
    }
    for (key, value) in [("lower_reentry", lower_reentry), ("upper_reentry", upper_reentry)] {
        if value <= lower_bound || value >= upper_bound {
            errors.push(format!(
                "[clock.face] {} must lie between lower_bound and upper_bound",
                key
            ));
        }
    }
}

fn check_range(
    errors: &mut Vec<String>,
    table: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(_) => errors.push(format!("[{}] {} must be an integer in {}-{}", section, key, min, max)),
    }
}

/// Parse "[^][!]gpioN" into (N, inverted)
fn parse_pin(s: &str) -> Option<(i64, bool)> {
    let mut s = s.trim();
    let mut inverted = false;
    while let Some(rest) = s.strip_prefix('!').or_else(|| s.strip_prefix('^')) {
        inverted |= s.starts_with('!');
        s = rest;
    }

    let pin: i64 = s.strip_prefix("gpio")?.parse().ok()?;
    (0..30).contains(&pin).then_some((pin, inverted))
}

fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
