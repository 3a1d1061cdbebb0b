//! Display loop: inter-thread message types, the `Surface` abstraction, the
//! redraw controller, and the timer/event multiplex.

pub mod controller;
pub mod event_loop;
pub mod surface;

/// Window-system events forwarded from the UI thread to the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The window became visible or had to be repainted.
    Expose,
    /// A pointer button went down inside the window.
    ButtonPress,
    /// A pointer button was released inside the window.
    ButtonRelease,
}

/// Drawing requests sent from the display loop back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Resize { width: u32, height: u32 },
    Clear,
    /// `y` is the text baseline, as in [`surface::Surface::draw_string`].
    DrawString { x: i32, y: i32, text: String },
}
