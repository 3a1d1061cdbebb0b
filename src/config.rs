//! Compile-time defaults for the clock window.

use std::time::Duration;

use crate::types::Mode;

/// Everything the window and loop need at startup.
///
/// There is no user-facing configuration; `ClockConfig::default()` is the
/// only source of values.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub title: &'static str,
    /// Window height in pixels, identical in both modes.
    pub height: u32,
    pub hex_width: u32,
    pub binary_width: u32,
    /// Top-left corner of the window on screen.
    pub position: (f32, f32),
    /// Maximum time the loop waits for an event before redrawing.
    pub tick: Duration,
    pub font_path: &'static str,
    pub font_size: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: "Geek Clock",
            height: 30,
            hex_width: 100,
            binary_width: 300,
            position: (1.0, 1.0),
            tick: Duration::from_secs(1),
            font_path: "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            font_size: 20.0,
        }
    }
}

impl ClockConfig {
    /// Window width for `mode`. Width is a pure function of the mode.
    pub fn width_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Hex => self.hex_width,
            Mode::Binary => self.binary_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let config = ClockConfig::default();
        assert_eq!(config.width_for(Mode::Hex), 100);
        assert_eq!(config.width_for(Mode::Binary), 300);
        assert_eq!(config.height, 30);
        assert_eq!(config.tick, Duration::from_secs(1));
    }
}
