//! Engine sub-modules: time formatting, clock state, and the system clock.

pub mod clock;
pub mod clock_state;
pub mod format;
