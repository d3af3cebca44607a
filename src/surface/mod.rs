//! Shared character-grid drawing surface.
//!
//! The grid is shared by every widget in the UI, so a paint must hold
//! exclusive access for the duration of one logical redraw: no two widgets
//! may interleave partial writes. Acquisition is scoped — the guard releases
//! the surface on every exit path, including early returns from a failed
//! paint.

use crate::model::SurfaceError;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

/// Handle to the process-wide character grid.
///
/// Owned by the top-level UI controller and injected into each widget at
/// construction; cloning the handle shares the same grid.
#[derive(Debug, Clone)]
pub struct SharedSurface {
    grid: Arc<Mutex<Buffer>>,
}

impl SharedSurface {
    /// Create a surface covering `area`, filled with blank cells.
    pub fn new(area: Rect) -> Self {
        Self {
            grid: Arc::new(Mutex::new(Buffer::empty(area))),
        }
    }

    /// Acquire exclusive access to the grid for one logical redraw.
    ///
    /// Fails with [`SurfaceError::Poisoned`] if a previous writer panicked
    /// mid-paint; that failure is fatal to the current redraw only and the
    /// caller decides whether to abort or retry the frame.
    pub fn begin_draw(&self) -> Result<DrawGuard<'_>, SurfaceError> {
        self.grid
            .lock()
            .map(DrawGuard)
            .map_err(|_| SurfaceError::Poisoned)
    }

    /// Replace the grid with a blank one covering `area`.
    ///
    /// Used on terminal resize; all previously painted content is dropped.
    pub fn resize(&self, area: Rect) -> Result<(), SurfaceError> {
        let mut grid = self.begin_draw()?;
        *grid = Buffer::empty(area);
        Ok(())
    }
}

/// Scoped exclusive access to the grid.
///
/// Dereferences to [`Buffer`]; dropping the guard ends the draw and releases
/// the surface unconditionally.
#[derive(Debug)]
pub struct DrawGuard<'a>(MutexGuard<'a, Buffer>);

impl Deref for DrawGuard<'_> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.0
    }
}

impl DerefMut for DrawGuard<'_> {
    fn deref_mut(&mut self) -> &mut Buffer {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_draw_grants_access_to_the_grid() {
        let surface = SharedSurface::new(Rect::new(0, 0, 10, 4));
        let grid = surface.begin_draw().expect("surface not poisoned");
        assert_eq!(*grid.area(), Rect::new(0, 0, 10, 4));
    }

    #[test]
    fn guard_releases_surface_on_drop() {
        let surface = SharedSurface::new(Rect::new(0, 0, 10, 4));
        {
            let _grid = surface.begin_draw().expect("first acquisition");
        }
        // A second acquisition would deadlock if the first leaked.
        let _grid = surface.begin_draw().expect("second acquisition");
    }

    #[test]
    fn resize_replaces_grid_with_blank_cells() {
        let surface = SharedSurface::new(Rect::new(0, 0, 10, 4));
        {
            let mut grid = surface.begin_draw().expect("acquire");
            grid[(0, 0)].set_char('x');
        }
        surface.resize(Rect::new(0, 0, 5, 2)).expect("resize");
        let grid = surface.begin_draw().expect("acquire");
        assert_eq!(*grid.area(), Rect::new(0, 0, 5, 2));
        assert_eq!(grid[(0, 0)].symbol(), " ");
    }

    #[test]
    fn panicked_writer_poisons_the_surface() {
        let surface = SharedSurface::new(Rect::new(0, 0, 10, 4));
        let clone = surface.clone();
        let result = std::thread::spawn(move || {
            let _grid = clone.begin_draw().expect("acquire before panic");
            panic!("simulated paint failure");
        })
        .join();
        assert!(result.is_err(), "writer thread should have panicked");

        match surface.begin_draw() {
            Err(SurfaceError::Poisoned) => {}
            Ok(_) => panic!("poisoned surface should not grant access"),
        };
    }
}
