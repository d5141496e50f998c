//! Board-agnostic core logic for the clock dial firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature decoding state machine and its interrupt-shared wrapper
//! - Clock face mapping (position ring with reentry points)
//! - Time formatting for the four digit display
//! - Button level capture
//! - Polling loop logic (map, render, report)
//! - Configuration types and the `clock.toml` parser
//! - Collaborator traits (channel reader, button sampler, display sink)

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod clock;
pub mod config;
pub mod encoder;
pub mod traits;
