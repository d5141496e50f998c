//! Clock polling loop
//!
//! Reads the shared position on every tick (or sooner when an edge task
//! reports activity), redraws the display when the mapped position moved
//! and reports what changed.

use defmt::*;
use embassy_futures::select::select;
use embassy_time::{Duration, Ticker};

use detent_core::clock::DialMonitor;
use detent_core::config::ClockConfig;
use detent_core::encoder::DecoderStats;

use crate::board::Display;
use crate::shared::{BUTTON, ENCODER, INPUT_ACTIVITY};

#[embassy_executor::task]
pub async fn clock_task(mut display: Display, config: ClockConfig) {
    info!("Clock task started");

    let mut monitor = DialMonitor::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    let mut last_stats = DecoderStats::default();
    let mut last_failed = 0;

    loop {
        let report = monitor.poll(&ENCODER, &BUTTON, &mut display);

        if let Some(update) = report.update {
            info!(
                "Position {} -> {} ({})",
                update.raw.value(),
                update.clock.steps(),
                update.time.label().as_str()
            );
        }

        if let Some(pressed) = report.button {
            info!("Button {}", if pressed { "pressed" } else { "released" });
        }

        let stats = ENCODER.snapshot().stats;
        if stats != last_stats {
            debug!(
                "Decoder: {} steps, {} armed, {} ignored",
                stats.steps, stats.armed, stats.ignored
            );
            last_stats = stats;
        }

        let failed = display.failed_writes();
        if failed != last_failed {
            warn!("Display: {} failed writes", failed);
            last_failed = failed;
        }

        select(ticker.next(), INPUT_ACTIVITY.wait()).await;
    }
}
