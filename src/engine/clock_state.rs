//! Mutable state owned by the display loop.

use crate::config::ClockConfig;
use crate::types::Mode;

/// Current mode, window geometry and the last text drawn.
///
/// `width` always equals `config.width_for(mode)`; the only way to change
/// the mode is [`ClockState::toggle_mode`], which updates both together.
#[derive(Debug, Clone)]
pub struct ClockState {
    mode: Mode,
    width: u32,
    height: u32,
    config: ClockConfig,
    pub last_rendered_text: String,
}

impl ClockState {
    pub fn new(config: &ClockConfig) -> Self {
        let mode = Mode::default();
        Self {
            mode,
            width: config.width_for(mode),
            height: config.height,
            config: config.clone(),
            last_rendered_text: String::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Switch Hex <-> Binary and return the new `(width, height)` the window
    /// must be resized to.
    pub fn toggle_mode(&mut self) -> (u32, u32) {
        self.mode = self.mode.toggled();
        self.width = self.config.width_for(self.mode);
        (self.width, self.height)
    }
}
