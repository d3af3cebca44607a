//! Scroll cursor: clamped offset from the newest reflowed row.

/// Scroll position measured in reflowed rows back from the newest row.
///
/// `0` means "pinned to the newest content". The cursor is always kept in
/// `[0, max(0, total - 1)]` where `total` is the current reflowed row count,
/// so no consumer ever observes an out-of-range offset. Every transition is
/// a no-op when the reflowed cache is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollCursor(usize);

impl ScrollCursor {
    /// Offset from the newest row, in reflowed rows.
    pub fn offset(self) -> usize {
        self.0
    }

    /// Move one row toward history, refusing to pass the oldest row.
    pub fn scroll_older(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        if self.0 + 1 < total {
            self.0 += 1;
        }
    }

    /// Move one row toward the present, refusing to pass the newest row.
    pub fn scroll_newer(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.0 = self.0.saturating_sub(1);
    }

    /// Jump to the oldest reflowed row.
    pub fn jump_oldest(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.0 = total - 1;
    }

    /// Jump back to the newest content.
    pub fn jump_newest(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.0 = 0;
    }

    /// Re-clamp after the reflowed row count changed.
    ///
    /// Shrinking the cache (clear, narrower strip, timestamp toggle) pulls
    /// an out-of-range cursor back to the oldest row; growth leaves the
    /// absolute offset alone so an append never yanks a scrolled-back reader
    /// to the present.
    pub fn clamp_to(&mut self, total: usize) {
        self.0 = self.0.min(total.saturating_sub(1));
    }
}
