//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! detent-core, written against the detent-hal pin and bus traits:
//!
//! - Encoder channel reader over two input pins
//! - Pushbutton sampler with active-low handling
//! - MAX7219 seven-segment display

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
