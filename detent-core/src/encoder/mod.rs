//! Quadrature encoder decoding
//!
//! Rising edges on channel A and B arrive independently. The decoder keeps a
//! single-step lookahead (which channel's rising edge completes the current
//! detent) and commits one count per detent.

pub mod decoder;
pub mod shared;

pub use decoder::{
    Channel, ChannelLevels, DecoderStats, Direction, EdgeOutcome, Expectation, Position,
    QuadratureDecoder,
};
pub use shared::{DecoderSnapshot, SharedEncoder};
