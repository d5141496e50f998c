//! Decoder state shared between edge handlers and the polling loop
//!
//! Every access runs inside a `critical_section::with` scope. On the target
//! the critical section masks interrupts, so an edge handler can never observe
//! (or leave behind) a half-updated expectation/position pair, and the
//! section is released on every exit path of the closure.

use core::cell::RefCell;

use critical_section::Mutex;

use super::decoder::{
    Channel, DecoderStats, EdgeOutcome, Expectation, Position, QuadratureDecoder,
};
use crate::traits::ChannelReader;

/// Consistent view of the decoder taken under one critical section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderSnapshot {
    pub position: Position,
    pub expectation: Expectation,
    pub stats: DecoderStats,
}

/// Interrupt-safe quadrature decoder
///
/// Meant to live in a `static` so both edge handlers and the polling loop
/// can reach it:
///
/// ```ignore
/// static ENCODER: SharedEncoder = SharedEncoder::new(Position::new(78));
/// ```
pub struct SharedEncoder {
    decoder: Mutex<RefCell<QuadratureDecoder>>,
}

impl SharedEncoder {
    pub const fn new(initial: Position) -> Self {
        Self {
            decoder: Mutex::new(RefCell::new(QuadratureDecoder::new(initial))),
        }
    }

    /// Edge handler body for a rising edge on `channel`
    ///
    /// Samples both levels through `reader` and applies the transition
    /// without leaving the critical section.
    pub fn on_rising_edge<R: ChannelReader + ?Sized>(
        &self,
        channel: Channel,
        reader: &R,
    ) -> EdgeOutcome {
        critical_section::with(|cs| {
            let levels = reader.read_levels();
            self.decoder
                .borrow_ref_mut(cs)
                .on_rising_edge(channel, levels)
        })
    }

    /// Current position
    pub fn position(&self) -> Position {
        critical_section::with(|cs| self.decoder.borrow_ref(cs).position())
    }

    /// Position, expectation and counters read together
    pub fn snapshot(&self) -> DecoderSnapshot {
        critical_section::with(|cs| {
            let decoder = self.decoder.borrow_ref(cs);
            DecoderSnapshot {
                position: decoder.position(),
                expectation: decoder.expectation(),
                stats: decoder.stats(),
            }
        })
    }

    /// Put the decoder back at rest on `position`
    ///
    /// Used once at startup when the configured initial position is known.
    pub fn reset(&self, position: Position) {
        critical_section::with(|cs| self.decoder.borrow_ref_mut(cs).reset(position));
    }
}
