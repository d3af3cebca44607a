//! Domain value types and error taxonomy.

pub mod error;
pub mod key_action;
pub mod line;

pub use error::{InputError, SurfaceError};
pub use key_action::KeyAction;
pub use line::LogLine;
