//! Polling loop body
//!
//! Reads the shared position, maps it onto the face and redraws the display
//! only when the mapped position moved. The caller owns the timing.

use super::formatter::{to_hours_minutes, HoursMinutes};
use super::mapper::{ClockFace, ClockPosition};
use crate::button::ButtonMonitor;
use crate::config::ClockConfig;
use crate::encoder::{Position, SharedEncoder};
use crate::traits::{DisplaySink, DisplaySinkExt};

/// A redraw, reported to the caller for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialUpdate {
    /// Raw counter value that produced the redraw
    pub raw: Position,
    pub clock: ClockPosition,
    pub time: HoursMinutes,
}

/// What one poll observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    pub update: Option<DialUpdate>,
    /// New button level, if it changed since the last poll
    pub button: Option<bool>,
}

pub struct DialMonitor {
    face: ClockFace,
    minutes_per_step: u8,
    rendered: Option<ClockPosition>,
}

impl DialMonitor {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            face: config.face,
            minutes_per_step: config.minutes_per_step,
            rendered: None,
        }
    }

    /// One polling iteration
    pub fn poll<D: DisplaySink + ?Sized>(
        &mut self,
        encoder: &SharedEncoder,
        button: &ButtonMonitor,
        display: &mut D,
    ) -> PollReport {
        let update = self.observe(encoder.position(), display);
        PollReport {
            update,
            button: button.take_change(),
        }
    }

    /// Render `raw` if its mapped position differs from what is on screen
    ///
    /// The first call always renders.
    pub fn observe<D: DisplaySink + ?Sized>(
        &mut self,
        raw: Position,
        display: &mut D,
    ) -> Option<DialUpdate> {
        let clock = self.face.map(raw);
        if self.rendered == Some(clock) {
            return None;
        }

        let time = to_hours_minutes(clock, self.minutes_per_step);
        display.show_time(&time);
        self.rendered = Some(clock);

        Some(DialUpdate { raw, clock, time })
    }

    /// Position currently on the display
    pub fn rendered(&self) -> Option<ClockPosition> {
        self.rendered
    }
}
