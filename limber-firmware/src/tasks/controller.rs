//! Main controller task
//!
//! Owns the pose controller and the working screen. Button presses and
//! ticks are applied in arrival order; the screen is published to the
//! display task whenever it changed.

use defmt::*;
use embassy_futures::select::{select, Either};

use limber_core::{Event, PoseCatalog, PoseController, TickOutcome, TimerConfig};
use limber_display::Screen;

use crate::channels::{INPUT_CHANNEL, SCREEN_BUFFER, SCREEN_UPDATE, TICK_SIGNAL};
use crate::tasks::haptic::SignalHaptic;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(catalog: PoseCatalog<'static>, timer: TimerConfig) {
    info!(
        "Controller task started ({} poses, {}s per pose)",
        catalog.len(),
        timer.interval_s
    );

    let mut controller = PoseController::new(catalog, timer);
    let mut screen = Screen::new();
    let mut haptic = SignalHaptic;

    controller.show_title(&mut screen);
    publish(&mut screen).await;

    loop {
        match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(button) => match controller.handle_button(button, &mut screen) {
                Event::Navigate(direction) => {
                    if let Some(index) = controller.current_index() {
                        info!("{:?}: pose {}", direction, index + 1);
                    }
                }
                Event::ToggleRun => {
                    info!(
                        "Timer {}",
                        if controller.is_running() { "started" } else { "paused" }
                    );
                }
                Event::Tick => {}
            },
            Either::Second(()) => match controller.on_tick(&mut screen, &mut haptic) {
                TickOutcome::Advanced { index } => {
                    info!("Interval elapsed, advancing to pose {}", index + 1);
                }
                TickOutcome::Counting { remaining_s } => {
                    trace!("{}s left", remaining_s);
                }
                TickOutcome::Paused => {}
            },
        }

        if screen.is_dirty() {
            publish(&mut screen).await;
        }
    }
}

/// Copy the working screen to the shared buffer and wake the display task
async fn publish(screen: &mut Screen) {
    {
        let mut shared = SCREEN_BUFFER.lock().await;
        *shared = screen.clone();
    }
    screen.mark_clean();
    SCREEN_UPDATE.signal(());
}
