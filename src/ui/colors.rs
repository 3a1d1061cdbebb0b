//! Window colours: black text on a white background.

use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const FOREGROUND: Color32 = Color32::BLACK;
