//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised by the shared drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A previous writer panicked while holding the surface lock.
    ///
    /// Fatal to the current redraw only; the caller decides whether to abort
    /// or retry the frame.
    #[error("drawing surface lock poisoned by a panicked writer")]
    Poisoned,
}

/// Errors raised by the line feed that supplies log input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Stdin is an interactive terminal, so no piped input can arrive.
    #[error("stdin is a terminal; pipe log lines in (e.g. `tail -f app.log | scrollback`)")]
    NoInput,

    /// Underlying I/O failure while reading input.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}
