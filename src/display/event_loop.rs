//! Timer/event multiplex driving the [`DisplayLoop`].

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time;

use crate::display::DisplayEvent;
use crate::display::controller::DisplayLoop;
use crate::display::surface::Surface;
use crate::engine::clock::Clock;

/// Wait up to `tick` for an event; redraw on timeout, otherwise drain every
/// pending event in arrival order before waiting again.
///
/// Returns the loop when the sending side (the UI) has gone away.
pub async fn run<S: Surface, C: Clock>(
    mut display: DisplayLoop<S, C>,
    mut events: UnboundedReceiver<DisplayEvent>,
    tick: Duration,
) -> DisplayLoop<S, C> {
    loop {
        match time::timeout(tick, events.recv()).await {
            Err(_elapsed) => display.on_tick(),
            Ok(Some(event)) => {
                display.handle_event(event);
                while let Ok(event) = events.try_recv() {
                    display.handle_event(event);
                }
            }
            Ok(None) => break,
        }
    }

    log::info!(
        "Display loop stopped in {} mode.",
        display.state().mode().name()
    );
    display
}
