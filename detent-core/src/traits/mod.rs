//! Collaborator traits
//!
//! These traits define the interface between the dial logic and the
//! hardware-specific implementations in `detent-drivers`.

pub mod channel;
pub mod display;

pub use channel::{ButtonSampler, ChannelReader};
pub use display::{DisplaySink, DisplaySinkExt, DIGIT_COUNT};
