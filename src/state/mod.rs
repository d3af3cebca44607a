//! Pure core: reflow engine, scroll cursor and scrollback state.
//!
//! Nothing in this module performs I/O or touches the terminal; every
//! function is deterministic in its inputs, which is what makes the
//! property suites in `tests/` possible.

pub mod reflow;
pub mod scroll;
pub mod scrollback;

pub use reflow::reflow;
pub use scroll::ScrollCursor;
pub use scrollback::ScrollbackState;
