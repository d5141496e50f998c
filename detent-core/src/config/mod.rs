//! Dial configuration
//!
//! Board wiring and clock face settings, parsed from `clock.toml`.

pub mod parse;
pub mod types;

pub use crate::clock::ClockFace;
pub use parse::{parse_config, parse_pin};
pub use types::*;
