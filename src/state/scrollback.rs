//! Scrollback state machine: raw log, reflow settings, derived cache, cursor.

use super::reflow::reflow;
use super::scroll::ScrollCursor;
use crate::model::LogLine;
use ratatui::layout::Rect;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "scrollback_tests.rs"]
mod tests;

/// State of one scrollback text view.
///
/// Owns the append-only raw log, the reflow settings, the derived reflowed
/// cache and the scroll cursor. The bounds rectangle is owned by the
/// surrounding layout manager and injected via [`ScrollbackState::set_bounds`].
///
/// The reflowed cache is never patched in place: any change to the raw log,
/// the timestamp flag or the viewport width replaces it wholesale and
/// re-clamps the cursor. Mutations never paint; the hosting event loop
/// redraws after each handled event.
///
/// Not internally synchronized. Lines produced on other threads must be
/// marshaled onto the UI thread (see [`crate::source::LineFeed`]) before
/// calling [`ScrollbackState::append_line`].
#[derive(Debug)]
pub struct ScrollbackState {
    lines: Vec<LogLine>,
    show_timestamps: bool,
    bounds: Rect,
    reflowed: Vec<String>,
    cursor: ScrollCursor,
}

impl Default for ScrollbackState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbackState {
    /// Create an empty view with timestamps shown.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            show_timestamps: true,
            bounds: Rect::default(),
            reflowed: Vec::new(),
            cursor: ScrollCursor::default(),
        }
    }

    /// Create an empty view with an explicit timestamp setting.
    pub fn with_timestamps(show_timestamps: bool) -> Self {
        Self {
            show_timestamps,
            ..Self::new()
        }
    }

    /// Append a formatted line to the raw log.
    ///
    /// A cursor at the newest row stays pinned there; a scrolled-back cursor
    /// keeps its absolute offset from the newest row, so the row it points
    /// at may shift as new rows arrive at the bottom. That is accepted
    /// behavior, not a bug.
    pub fn append_line(&mut self, line: LogLine) {
        if !line.has_timestamp() {
            warn!(raw = line.raw(), "log line missing ']' delimiter; displaying unstripped");
        }
        self.lines.push(line);
        self.recompute();
    }

    /// Drop the whole log, the reflowed cache and the scroll position.
    pub fn clear(&mut self) {
        debug!(dropped = self.lines.len(), "clearing scrollback");
        self.lines.clear();
        self.reflowed.clear();
        self.cursor = ScrollCursor::default();
    }

    /// Flip timestamp display and rewrap.
    ///
    /// The cursor is not reset; it is only re-clamped against the new row
    /// count.
    pub fn toggle_timestamps(&mut self) {
        self.show_timestamps = !self.show_timestamps;
        self.recompute();
    }

    /// Update the viewport rectangle, rewrapping if the width changed.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let width_changed = bounds.width != self.bounds.width;
        self.bounds = bounds;
        if width_changed {
            self.recompute();
        }
    }

    /// Scroll one row toward history.
    pub fn scroll_older(&mut self) {
        self.cursor.scroll_older(self.reflowed.len());
    }

    /// Scroll one row toward the present.
    pub fn scroll_newer(&mut self) {
        self.cursor.scroll_newer(self.reflowed.len());
    }

    /// Jump to the oldest reflowed row.
    pub fn jump_oldest(&mut self) {
        self.cursor.jump_oldest(self.reflowed.len());
    }

    /// Jump back to the newest content.
    pub fn jump_newest(&mut self) {
        self.cursor.jump_newest(self.reflowed.len());
    }

    /// The raw log, oldest first.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The reflowed cache for the current width and timestamp setting.
    pub fn reflowed(&self) -> &[String] {
        &self.reflowed
    }

    /// Current scroll offset in reflowed rows back from newest.
    pub fn cursor(&self) -> usize {
        self.cursor.offset()
    }

    /// Current viewport rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether timestamps are currently shown.
    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    fn recompute(&mut self) {
        self.reflowed = reflow(&self.lines, self.bounds.width, self.show_timestamps);
        self.cursor.clamp_to(self.reflowed.len());
    }
}
