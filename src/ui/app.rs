//! Application orchestrator: forwards window events to the display loop and
//! paints whatever the loop last drew.

use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver, Sender as StdSender};
use std::thread;

use eframe::egui::{self, FontId, Vec2};
use tokio::sync::mpsc::{self as tokio_mpsc, UnboundedReceiver, UnboundedSender};

use crate::config::ClockConfig;
use crate::display::controller::DisplayLoop;
use crate::display::{DisplayEvent, SurfaceCommand, event_loop};
use crate::engine::{clock::LocalClock, clock_state::ClockState};
use crate::error::{AppError, Result};
use crate::ui::window::{Canvas, EguiSurface};
use crate::ui::{colors, fonts};

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// The clock itself runs on a dedicated display-loop thread. `App` only:
/// 1. Starts that thread on the first frame.
/// 2. Translates egui input into [`DisplayEvent`]s.
/// 3. Applies incoming [`SurfaceCommand`]s and paints the [`Canvas`].
pub struct App {
    config: ClockConfig,
    font: FontId,
    canvas: Canvas,
    rx: StdReceiver<SurfaceCommand>,
    events: EventForwarder,
    expose: ExposeTracker,
    /// Loop-side channel ends, handed over when the loop thread starts.
    pending: Option<(StdSender<SurfaceCommand>, UnboundedReceiver<DisplayEvent>)>,
}

// ── Expose tracking ────────────────────────────────────────────────────────────

/// Decides when the window needs an Expose: the first frame, an inner-size
/// change, or a restore from minimized.
#[derive(Debug, Default)]
struct ExposeTracker {
    exposed_once: bool,
    last_size: Option<Vec2>,
    was_minimized: bool,
}

impl ExposeTracker {
    /// Feed one frame's viewport info. A frame without a known size never
    /// overwrites the last known one.
    fn expose_due(&mut self, size: Option<Vec2>, minimized: bool) -> bool {
        let resized = size.is_some() && size != self.last_size;
        let restored = self.was_minimized && !minimized;
        let due = !self.exposed_once || resized || restored;

        self.exposed_once = true;
        if size.is_some() {
            self.last_size = size;
        }
        self.was_minimized = minimized;
        due
    }
}

// ── Event forwarding ───────────────────────────────────────────────────────────

/// Sends events to the display loop, logging once if the loop has gone.
#[derive(Debug)]
struct EventForwarder {
    tx: UnboundedSender<DisplayEvent>,
    reported_closed: bool,
}

impl EventForwarder {
    fn new(tx: UnboundedSender<DisplayEvent>) -> Self {
        Self {
            tx,
            reported_closed: false,
        }
    }

    fn send(&mut self, event: DisplayEvent) -> bool {
        if self.tx.send(event).is_ok() {
            return true;
        }
        if !self.reported_closed {
            log::error!("Display loop is not running; dropping {event:?} and later events.");
            self.reported_closed = true;
        }
        false
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClockConfig) -> Self {
        let font = fonts::install_fonts(&cc.egui_ctx, &config);
        let (tx, rx) = std_mpsc::channel();
        let (event_tx, event_rx) = tokio_mpsc::unbounded_channel();

        Self {
            config,
            font,
            canvas: Canvas::default(),
            rx,
            events: EventForwarder::new(event_tx),
            expose: ExposeTracker::default(),
            pending: Some((tx, event_rx)),
        }
    }

    /// Spawn the Tokio runtime + display loop onto a dedicated OS thread.
    ///
    /// Fonts only exist once a frame has run, so this is called from the first
    /// `update` rather than from `new`.
    fn start_display_loop(&mut self, ctx: &egui::Context) -> Result<()> {
        let Some((tx, event_rx)) = self.pending.take() else {
            return Ok(());
        };
        let surface = EguiSurface::new(ctx.clone(), self.font.clone(), tx);
        let state = ClockState::new(&self.config);
        let tick = self.config.tick;

        thread::Builder::new()
            .name("display-loop".to_owned())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        log::error!("{}", AppError::from(e));
                        return;
                    }
                };
                let display = DisplayLoop::new(state, surface, LocalClock);
                runtime.block_on(event_loop::run(display, event_rx, tick));
            })?;

        log::info!("Display loop started.");
        Ok(())
    }

    /// Window-system events since the last frame, in arrival order.
    fn collect_events(&mut self, ctx: &egui::Context) -> Vec<DisplayEvent> {
        ctx.input(|i| {
            let mut events = Vec::new();

            let size = i.viewport().inner_rect.map(|r| r.size());
            let minimized = i.viewport().minimized.unwrap_or(false);
            if self.expose.expose_due(size, minimized) {
                events.push(DisplayEvent::Expose);
            }

            events.extend(i.events.iter().filter_map(pointer_event));
            events
        })
    }
}

fn pointer_event(event: &egui::Event) -> Option<DisplayEvent> {
    match event {
        egui::Event::PointerButton { pressed: true, .. } => Some(DisplayEvent::ButtonPress),
        egui::Event::PointerButton { pressed: false, .. } => Some(DisplayEvent::ButtonRelease),
        _ => None,
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Start the display loop on the first frame ──────────────────────
        if self.pending.is_some()
            && let Err(e) = self.start_display_loop(ctx)
        {
            log::error!("{e}");
        }

        // ── 2. Forward input to the loop ──────────────────────────────────────
        for event in self.collect_events(ctx) {
            self.events.send(event);
        }

        // ── 3. Apply drawing commands ─────────────────────────────────────────
        while let Ok(command) = self.rx.try_recv() {
            if let Some(viewport) = self.canvas.apply(command) {
                ctx.send_viewport_cmd(viewport);
            }
        }

        // ── 4. Paint ──────────────────────────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::BACKGROUND))
            .show(ctx, |ui| self.canvas.paint(ui, &self.font));
    }
}
