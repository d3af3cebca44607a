//! Domain actions the key dispatcher can trigger.

/// An action resolved from a key event by [`crate::config::KeyBindings`].
///
/// The scrollback view defines no bindings of its own; the surrounding
/// dispatcher maps keys to these actions and invokes the matching state
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Scroll one row toward history.
    ScrollOlder,
    /// Scroll one row toward the present.
    ScrollNewer,
    /// Scroll one viewport page toward history.
    PageOlder,
    /// Scroll one viewport page toward the present.
    PageNewer,
    /// Jump to the oldest reflowed row.
    JumpOldest,
    /// Jump back to the newest content.
    JumpNewest,
    /// Flip timestamp display on or off.
    ToggleTimestamps,
    /// Drop the whole log and reset the scroll cursor.
    Clear,
    /// Leave the application.
    Quit,
}
