//! UI layer: the eframe App, the egui-backed surface, fonts and colours.

pub mod app;
pub mod colors;
pub mod fonts;
pub mod window;
