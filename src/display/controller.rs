//! Redraw controller: owns the clock state and reacts to ticks and events.

use crate::display::DisplayEvent;
use crate::display::surface::{Surface, text_origin};
use crate::engine::{clock::Clock, clock_state::ClockState, format::format_time};

/// The display loop's state and collaborators.
///
/// `DisplayLoop` is synchronous; [`crate::display::event_loop::run`] decides
/// *when* to call it, this type decides *what* to draw.
pub struct DisplayLoop<S, C> {
    state: ClockState,
    surface: S,
    clock: C,
}

impl<S: Surface, C: Clock> DisplayLoop<S, C> {
    pub fn new(state: ClockState, surface: S, clock: C) -> Self {
        Self {
            state,
            surface,
            clock,
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The wait timed out: show the new second.
    pub fn on_tick(&mut self) {
        self.redraw();
    }

    pub fn handle_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Expose => self.redraw(),
            DisplayEvent::ButtonRelease => {
                let (width, height) = self.state.toggle_mode();
                log::debug!("mode -> {} ({width}x{height})", self.state.mode().name());
                self.surface.resize(width, height);
                self.redraw();
            }
            DisplayEvent::ButtonPress => {}
        }
    }

    /// Sample the clock, format, centre, clear, draw.
    ///
    /// Centring is recomputed every time; text width changes across modes.
    pub fn redraw(&mut self) {
        let text = format_time(self.clock.now(), self.state.mode());
        let extents = self.surface.text_extents(&text);
        let (x, y) = text_origin(self.state.width(), self.state.height(), extents);
        log::trace!("redraw {text:?} at ({x}, {y})");

        self.surface.clear();
        self.surface.draw_string(x, y, &text);
        self.state.last_rendered_text = text;
    }
}
