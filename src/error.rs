//! Application-level error types.

use thiserror::Error;

/// Errors that can occur while setting up the clock.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to load font {path}: {source}")]
    FontLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open display: {0}")]
    Display(#[from] eframe::Error),

    #[error("Display loop runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
