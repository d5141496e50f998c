//! Clock dial: face mapping, time formatting and the polling loop

pub mod formatter;
pub mod mapper;
pub mod monitor;

pub use formatter::{to_hours_minutes, HoursMinutes, DEFAULT_MINUTES_PER_STEP, LABEL_LEN};
pub use mapper::{ClockFace, ClockPosition, FaceError};
pub use monitor::{DialMonitor, DialUpdate, PollReport};
