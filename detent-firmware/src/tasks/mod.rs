//! Embassy async tasks
//!
//! The edge tasks stand in for the pin interrupt handlers: each wakes on a
//! GPIO edge and runs its handler body inside a critical section. The clock
//! task is the polling loop.

pub mod button;
pub mod clock;
pub mod encoder;

pub use button::button_task;
pub use clock::clock_task;
pub use encoder::encoder_task;
