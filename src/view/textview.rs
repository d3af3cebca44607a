//! Paint routine for the scrollback view.

use super::styles::TextAttrs;
use crate::model::SurfaceError;
use crate::state::ScrollbackState;
use crate::surface::SharedSurface;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Widget that paints the visible slice of a reflowed log.
///
/// Paints every cell of its area — `height` rows by `width` columns, one
/// char per cell with the configured attribute pair. Rows beyond the
/// available content and columns beyond a row's length are painted blank.
///
/// The scroll cursor chooses the visible slice: the bottom-most content row
/// is reflowed index `len - 1 - cursor`, with earlier rows filling upward.
/// Content shorter than the viewport is painted from the top, blank rows
/// below.
#[derive(Debug)]
pub struct TextView<'a> {
    rows: &'a [String],
    cursor: usize,
    attrs: TextAttrs,
}

impl<'a> TextView<'a> {
    /// Build a view over an already-reflowed row cache.
    pub fn new(rows: &'a [String], cursor: usize, attrs: TextAttrs) -> Self {
        Self { rows, cursor, attrs }
    }

    /// Build a view over a scrollback state.
    pub fn for_state(state: &'a ScrollbackState, attrs: TextAttrs) -> Self {
        Self::new(state.reflowed(), state.cursor(), attrs)
    }

    /// Paint through the shared surface into the given bounds.
    ///
    /// Acquires the surface for the duration of the paint; the guard is
    /// released on every exit path. The painted region is the intersection
    /// of `bounds` with the surface grid, so stale bounds after a resize
    /// cannot write out of range.
    pub fn paint(self, surface: &SharedSurface, bounds: Rect) -> Result<(), SurfaceError> {
        let mut grid = surface.begin_draw()?;
        let area = bounds.intersection(*grid.area());
        self.render(area, &mut grid);
        Ok(())
    }

    /// The reflowed rows visible in a viewport of `height` rows.
    fn visible(&self, height: usize) -> &'a [String] {
        let total = self.rows.len();
        if total == 0 || height == 0 {
            return &[];
        }
        let bottom = total - 1 - self.cursor.min(total - 1);
        let end = bottom + 1;
        let start = end.saturating_sub(height);
        &self.rows[start..end]
    }
}

impl Widget for TextView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = self.attrs.as_style();
        let visible = self.visible(area.height as usize);

        for (dy, y) in (area.top()..area.bottom()).enumerate() {
            let mut chars = visible.get(dy).map(|row| row.chars());
            for x in area.left()..area.right() {
                let ch = chars
                    .as_mut()
                    .and_then(|chars| chars.next())
                    .unwrap_or(' ');
                let cell = &mut buf[(x, y)];
                cell.set_char(ch);
                cell.set_style(style);
            }
        }
    }
}
