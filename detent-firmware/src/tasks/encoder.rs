//! Encoder edge task
//!
//! Waits for a rising edge on either channel and feeds it to the shared
//! decoder. Both channels are served by this one task, so handlers for A
//! and B can never overlap.
//!
//! Each pass arms fresh edge waits, which clears any edge latched in the
//! meantime. An edge arriving while the previous one is still being handled
//! is therefore lost and a fast turn can drop detents.

use defmt::*;
use embassy_futures::select::{select, Either};

use detent_core::encoder::{Channel, EdgeOutcome};

use crate::board::EncoderPins;
use crate::shared::{ENCODER, INPUT_ACTIVITY};

#[embassy_executor::task]
pub async fn encoder_task(mut pins: EncoderPins) {
    info!("Encoder task started");

    loop {
        let channel = match select(pins.a.wait_for_rising_edge(), pins.b.wait_for_rising_edge()).await
        {
            Either::First(()) => Channel::A,
            Either::Second(()) => Channel::B,
        };

        match ENCODER.on_rising_edge(channel, &pins) {
            EdgeOutcome::Stepped(direction) => {
                trace!("Detent {}", direction);
                INPUT_ACTIVITY.signal(());
            }
            EdgeOutcome::Armed(expected) => trace!("{} leading, expecting {}", channel, expected),
            EdgeOutcome::Ignored => trace!("Ignored edge on {}", channel),
        }
    }
}
