//! The egui side of the window: a [`Surface`] the display loop draws through,
//! and the [`Canvas`] the UI thread paints from.

use std::sync::mpsc::Sender as StdSender;

use eframe::egui::{self, Align2, FontId, Pos2, ViewportCommand};

use crate::display::SurfaceCommand;
use crate::display::surface::{Surface, TextExtents};
use crate::ui::colors;

/// [`Surface`] used on the display-loop thread.
///
/// Measures text through the shared egui font atlas and forwards every
/// drawing call to the UI thread as a [`SurfaceCommand`].
pub struct EguiSurface {
    ctx: egui::Context,
    font: FontId,
    tx: StdSender<SurfaceCommand>,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context, font: FontId, tx: StdSender<SurfaceCommand>) -> Self {
        Self { ctx, font, tx }
    }

    fn send(&self, command: SurfaceCommand) {
        if self.tx.send(command).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

impl Surface for EguiSurface {
    fn text_extents(&self, text: &str) -> TextExtents {
        let (width, row_height) = self.ctx.fonts(|fonts| {
            let galley =
                fonts.layout_no_wrap(text.to_owned(), self.font.clone(), colors::FOREGROUND);
            (galley.size().x, fonts.row_height(&self.font))
        });
        // egui lays text out from the row top, so the whole row counts as ascent.
        TextExtents {
            width: width.ceil() as i32,
            ascent: row_height.ceil() as i32,
            descent: 0,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.send(SurfaceCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.send(SurfaceCommand::Clear);
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.send(SurfaceCommand::DrawString {
            x,
            y,
            text: text.to_owned(),
        });
    }
}

/// What is currently drawn in the window.
#[derive(Debug, Default)]
pub struct Canvas {
    /// Baseline origin and text of the last `DrawString` since `Clear`.
    text: Option<(Pos2, String)>,
}

impl Canvas {
    /// Apply a command from the display loop. Returns the viewport command a
    /// resize turns into.
    pub fn apply(&mut self, command: SurfaceCommand) -> Option<ViewportCommand> {
        match command {
            SurfaceCommand::Resize { width, height } => Some(ViewportCommand::InnerSize(
                egui::vec2(width as f32, height as f32),
            )),
            SurfaceCommand::Clear => {
                self.text = None;
                None
            }
            SurfaceCommand::DrawString { x, y, text } => {
                self.text = Some((Pos2::new(x as f32, y as f32), text));
                None
            }
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().map(|(_, text)| text.as_str())
    }

    pub fn paint(&self, ui: &egui::Ui, font: &FontId) {
        let Some((baseline, text)) = &self.text else {
            return;
        };
        let row_height = ui.fonts(|fonts| fonts.row_height(font));
        let top_left =
            ui.max_rect().min + egui::vec2(baseline.x, baseline.y - row_height.ceil());
        ui.painter().text(
            top_left,
            Align2::LEFT_TOP,
            text,
            font.clone(),
            colors::FOREGROUND,
        );
    }
}
