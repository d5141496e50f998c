//! Clock face mapping
//!
//! Folds the raw encoder position into the band of valid clock positions.
//! The default face has 156 steps (13 hours of 5 minute steps) and renders
//! 1:00 through 12:55; stepping past either end re-enters at the other.

use core::ops::RangeInclusive;

use crate::encoder::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position on the clock face, in steps since 0:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockPosition(u8);

impl ClockPosition {
    pub const fn new(steps: u8) -> Self {
        Self(steps)
    }

    /// Steps since 0:00
    pub const fn steps(self) -> u8 {
        self.0
    }
}

/// Face validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// No position lies strictly between the lower and upper bound
    EmptyRange,
    /// A reentry point falls outside the valid band
    ReentryOutOfRange,
}

/// Ring bounds and reentry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockFace {
    /// Positions at or above this re-enter at `lower_reentry`
    pub upper_bound: u8,
    /// Where the face continues after running off the top
    pub lower_reentry: u8,
    /// Positions at or below this re-enter at `upper_reentry`
    pub lower_bound: u8,
    /// Where the face continues after running off the bottom
    pub upper_reentry: u8,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::TWELVE_HOUR
    }
}

impl ClockFace {
    /// 12 hour face at 5 minute resolution: 1:00 (12) to 12:55 (155)
    pub const TWELVE_HOUR: Self = Self {
        upper_bound: 156,
        lower_reentry: 12,
        lower_bound: 11,
        upper_reentry: 155,
    };

    /// Map a raw position onto the face
    ///
    /// Total over every counter value. For a face that passes
    /// [`validate`](Self::validate) the result is always inside
    /// [`valid_range`](Self::valid_range).
    pub fn map(&self, position: Position) -> ClockPosition {
        let value = position.value();
        if value >= self.upper_bound {
            ClockPosition(self.lower_reentry)
        } else if value <= self.lower_bound {
            ClockPosition(self.upper_reentry)
        } else {
            ClockPosition(value)
        }
    }

    /// Positions that render unchanged
    pub fn valid_range(&self) -> RangeInclusive<u8> {
        self.lower_bound.saturating_add(1)..=self.upper_bound.saturating_sub(1)
    }

    /// Check the bounds leave a non-empty band containing both reentry points
    pub fn validate(&self) -> Result<(), FaceError> {
        if u16::from(self.lower_bound) + 2 > u16::from(self.upper_bound) {
            return Err(FaceError::EmptyRange);
        }

        let range = self.valid_range();
        if !range.contains(&self.lower_reentry) || !range.contains(&self.upper_reentry) {
            return Err(FaceError::ReentryOutOfRange);
        }

        Ok(())
    }
}
