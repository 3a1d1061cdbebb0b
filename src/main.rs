mod config;
mod display;
mod engine;
mod error;
mod types;
mod ui;
mod utils;

use std::io::{self, Write};

use eframe::egui;

use crate::config::ClockConfig;
use crate::error::AppError;
use crate::types::Mode;
use crate::ui::app::App;

/// Print a fatal setup error through the logger, or straight to `out` when
/// the log filter would swallow it.
fn report_fatal(err: &AppError, out: &mut impl Write) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{err}");
    } else {
        let _ = writeln!(out, "{err}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClockConfig::default();
    let title = config.title;
    let (x, y) = config.position;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([
                config.width_for(Mode::default()) as f32,
                config.height as f32,
            ])
            .with_position([x, y])
            .with_decorations(false),
        ..Default::default()
    };

    log::info!("Starting {title}.");
    if let Err(e) = eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    ) {
        report_fatal(&AppError::from(e), &mut io::stderr());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_error_is_written_when_logging_is_off() {
        // No logger is installed in tests, so every level is filtered out.
        assert!(!log::log_enabled!(log::Level::Error));

        let err = AppError::Runtime(io::Error::other("no display server"));
        let mut out = Vec::new();
        report_fatal(&err, &mut out);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Display loop runtime error: no display server\n"
        );
    }

    #[test]
    fn initial_window_matches_the_default_mode() {
        let config = ClockConfig::default();
        assert_eq!(config.width_for(Mode::default()), 100);
        assert_eq!(config.height, 30);
    }
}
