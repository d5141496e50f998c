//! Button edge task
//!
//! Re-samples the button on every edge, rising or falling.

use defmt::*;

use crate::board::Button;
use crate::shared::{BUTTON, INPUT_ACTIVITY};

#[embassy_executor::task]
pub async fn button_task(mut button: Button) {
    info!("Button task started");

    // Pick up a button already held at power-up
    BUTTON.on_level_change(&button);

    loop {
        button.pin_mut().wait_for_any_edge().await;

        let pressed = BUTTON.on_level_change(&button);
        trace!("Button edge, pressed={}", pressed);
        INPUT_ACTIVITY.signal(());
    }
}
