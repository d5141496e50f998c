//! Detent - Rotary Encoder Clock Dial Firmware
//!
//! Decodes a quadrature rotary encoder into a position counter, maps it
//! onto a 12 hour clock face and shows the time on a MAX7219 four digit
//! display, while tracking a pushbutton.
//!
//! Named after the mechanical resting positions of the encoder shaft -
//! every detent the user feels is exactly one step of the clock face.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod shared;
mod tasks;

use crate::board::Board;
use crate::shared::ENCODER;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    ENCODER.reset(config.clock.initial_position());

    let Board {
        encoder,
        button,
        mut display,
    } = unwrap!(Board::init(p, &config));

    if let Err(e) = display.init(config.display.intensity) {
        warn!("Display init failed: {}", Debug2Format(&e));
    }

    spawner.spawn(tasks::encoder_task(encoder)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner
        .spawn(tasks::clock_task(display, config.clock))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
