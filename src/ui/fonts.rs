//! Font loading with a fallback to egui's built-in monospace ("fixed") font.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily, FontId};

use crate::config::ClockConfig;
use crate::error::{AppError, Result};

/// Family name the preferred font is registered under.
pub const CLOCK_FAMILY: &str = "clock";

pub fn read_font(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| AppError::FontLoad {
        path: path.to_owned(),
        source,
    })
}

/// Default definitions plus `bytes` registered as [`CLOCK_FAMILY`].
pub fn clock_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut defs = FontDefinitions::default();
    defs.font_data.insert(
        CLOCK_FAMILY.to_owned(),
        Arc::new(FontData::from_owned(bytes)),
    );
    defs.families.insert(
        FontFamily::Name(CLOCK_FAMILY.into()),
        vec![CLOCK_FAMILY.to_owned()],
    );
    defs
}

/// Install the preferred font into `ctx` and return the id to draw with.
///
/// A missing or unreadable font file is not fatal: a warning is logged and
/// the built-in monospace family is used instead.
pub fn install_fonts(ctx: &egui::Context, config: &ClockConfig) -> FontId {
    match read_font(config.font_path) {
        Ok(bytes) => {
            ctx.set_fonts(clock_font_definitions(bytes));
            log::info!("Loaded font {}", config.font_path);
            FontId::new(config.font_size, FontFamily::Name(CLOCK_FAMILY.into()))
        }
        Err(e) => {
            log::warn!("{e}: using fixed");
            FontId::monospace(config.font_size)
        }
    }
}
