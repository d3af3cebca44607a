//! Terminal scrollback text view.
//!
//! A widget that accumulates an unbounded ordered log of timestamped text
//! lines, reflows them to a variable-width viewport, supports timestamp
//! suppression and line-based scrolling, and paints the visible window into a
//! shared character grid.
//!
//! The crate follows a Pure Core / Impure Shell split: everything under
//! [`state`] is pure and deterministic, while [`surface`], [`view`] and
//! [`source`] talk to the terminal and to threads.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod surface;
pub mod view;
