//! Rising-edge quadrature decoder
//!
//! Only rising edges are observed. A detent transition on this kind of
//! encoder drops one channel low and brings it back high, then does the same
//! on the other channel; which channel leads decides the direction.
//!
//! ```text
//!            leading edge            completing edge
//! CW:   A rises (A=1, B=0)  ->  B rises (A=1, B=1)  ->  +1
//! CCW:  B rises (A=0, B=1)  ->  A rises (A=1, B=1)  ->  -1
//! ```
//!
//! The leading edge arms an expectation for the other channel. The
//! completing edge only counts if it finds that expectation armed, which is
//! what rejects a bouncing channel re-triggering after a detent: the
//! expectation it would need was already cleared by the commit.
//!
//! When the shaft turns faster than the edges can be serviced, a later
//! leading edge replaces the pending expectation and the first completing
//! edge clears it, so contradictory edges fall into the ignore branch. Lost
//! counts in that regime are an accepted limitation and are not reported as
//! errors; [`DecoderStats::ignored`] shows how often it happens.

/// Encoder channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// The channel that did not trigger
    pub const fn other(self) -> Self {
        match self {
            Channel::A => Channel::B,
            Channel::B => Channel::A,
        }
    }
}

/// Snapshot of both channel levels taken at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelLevels {
    /// Channel A reads high
    pub a: bool,
    /// Channel B reads high
    pub b: bool,
}

impl ChannelLevels {
    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }

    /// Level of one channel
    pub const fn level(self, channel: Channel) -> bool {
        match channel {
            Channel::A => self.a,
            Channel::B => self.b,
        }
    }
}

/// Which rising edge would complete the current detent
///
/// Replaces a pair of independent flags; "expecting both" cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expectation {
    /// Settled on a detent, nothing armed
    #[default]
    Idle,
    /// A rising edge on A completes the detent
    ExpectingA,
    /// A rising edge on B completes the detent
    ExpectingB,
}

impl Expectation {
    /// Expectation armed for `channel`
    pub const fn expecting(channel: Channel) -> Self {
        match channel {
            Channel::A => Expectation::ExpectingA,
            Channel::B => Expectation::ExpectingB,
        }
    }

    /// Whether a rising edge on `channel` would complete the detent
    pub const fn is_expecting(self, channel: Channel) -> bool {
        matches!(
            (self, channel),
            (Expectation::ExpectingA, Channel::A) | (Expectation::ExpectingB, Channel::B)
        )
    }

    /// Flag view: expecting a rising edge on A
    pub const fn expect_a(self) -> bool {
        self.is_expecting(Channel::A)
    }

    /// Flag view: expecting a rising edge on B
    pub const fn expect_b(self) -> bool {
        self.is_expecting(Channel::B)
    }
}

/// Rotation direction of a committed detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// A led, B completed: position +1
    Clockwise,
    /// B led, A completed: position -1
    CounterClockwise,
}

/// Encoder position counter
///
/// An 8-bit counter that wraps on overflow in both directions. The clock
/// face mapping is defined for every value, so wrapping is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(u8);

impl Position {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw counter value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position one detent further in `direction`
    pub const fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => Self(self.0.wrapping_add(1)),
            Direction::CounterClockwise => Self(self.0.wrapping_sub(1)),
        }
    }
}

impl From<u8> for Position {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Transition taken for one rising edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Completing edge: position moved one detent
    Stepped(Direction),
    /// Leading edge: now expecting the given channel to complete
    Armed(Channel),
    /// Spurious or bounce edge, state unchanged
    Ignored,
}

/// Edge counters for diagnostics
///
/// Counters saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderStats {
    /// Detents committed in either direction
    pub steps: u32,
    /// Leading edges that armed an expectation
    pub armed: u32,
    /// Edges rejected as bounce
    pub ignored: u32,
}

/// Quadrature decoder state
///
/// Pure state machine: the caller supplies the level snapshot. For the
/// interrupt-shared version see [`SharedEncoder`](super::SharedEncoder).
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    expectation: Expectation,
    position: Position,
    stats: DecoderStats,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new(Position::default())
    }
}

impl QuadratureDecoder {
    /// Create a decoder resting on a detent at `initial`
    pub const fn new(initial: Position) -> Self {
        Self {
            expectation: Expectation::Idle,
            position: initial,
            stats: DecoderStats {
                steps: 0,
                armed: 0,
                ignored: 0,
            },
        }
    }

    /// Handle a rising edge on `channel` given the levels sampled with it
    pub fn on_rising_edge(&mut self, channel: Channel, levels: ChannelLevels) -> EdgeOutcome {
        let other = channel.other();

        let outcome = match (levels.level(channel), levels.level(other)) {
            (true, true) if self.expectation.is_expecting(channel) => {
                EdgeOutcome::Stepped(match channel {
                    Channel::A => Direction::CounterClockwise,
                    Channel::B => Direction::Clockwise,
                })
            }
            (true, false) => EdgeOutcome::Armed(other),
            _ => EdgeOutcome::Ignored,
        };

        match outcome {
            EdgeOutcome::Stepped(direction) => {
                self.position = self.position.stepped(direction);
                self.expectation = Expectation::Idle;
                self.stats.steps = self.stats.steps.saturating_add(1);
            }
            EdgeOutcome::Armed(expected) => {
                self.expectation = Expectation::expecting(expected);
                self.stats.armed = self.stats.armed.saturating_add(1);
            }
            EdgeOutcome::Ignored => {
                self.stats.ignored = self.stats.ignored.saturating_add(1);
            }
        }

        outcome
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current expectation
    pub fn expectation(&self) -> Expectation {
        self.expectation
    }

    /// Edge counters since creation or the last reset
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Return to rest at `position`, clearing the expectation and counters
    pub fn reset(&mut self, position: Position) {
        *self = Self::new(position);
    }
}
