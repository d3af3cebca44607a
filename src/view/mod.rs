//! TUI shell: terminal management and the event loop (impure shell).

pub mod styles;
pub mod textview;

pub use styles::TextAttrs;
pub use textview::TextView;

use crate::config::{Config, KeyBindings};
use crate::model::{InputError, KeyAction, LogLine, SurfaceError};
use crate::source::LineFeed;
use crate::state::ScrollbackState;
use crate::surface::SharedSurface;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the TUI.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Line feed error.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Drawing surface error.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Poll interval for draining the line feed when no terminal events arrive.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI application driving one scrollback view.
///
/// Generic over the backend so tests can drive it with
/// `ratatui::backend::TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: ScrollbackState,
    surface: SharedSurface,
    feed: LineFeed,
    bindings: KeyBindings,
    attrs: TextAttrs,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and sizes
    /// the view and the shared surface to the full terminal.
    pub fn new(feed: LineFeed, config: &Config) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        let mut state = ScrollbackState::with_timestamps(config.show_timestamps);
        state.set_bounds(area);

        Ok(Self {
            terminal,
            state,
            surface: SharedSurface::new(area),
            feed,
            bindings: KeyBindings::default(),
            attrs: TextAttrs::from_names(config.foreground.as_deref(), config.background.as_deref()),
        })
    }

    /// Run the main event loop until the user quits.
    ///
    /// Event-driven: redraws on key events, resize notifications and newly
    /// arrived lines; idles on the tick interval otherwise. All mutation
    /// happens on this thread — the feed marshals lines produced elsewhere.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            info!("quit requested");
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height)?;
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.drain_feed() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Append any lines the feed has marshaled since the last tick.
    ///
    /// Incoming text is bare message content; it is stamped with the local
    /// time here so the view stores fully formatted lines. Returns true if
    /// anything was appended (a redraw is due).
    fn drain_feed(&mut self) -> bool {
        let lines = self.feed.drain();
        if lines.is_empty() {
            return false;
        }
        debug!(count = lines.len(), "appending new lines");
        for line in lines {
            self.state.append_line(LogLine::stamp(&line));
        }
        true
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.bindings.get(key) else {
            return false;
        };

        let page = self.state.bounds().height.saturating_sub(1).max(1) as usize;
        match action {
            KeyAction::ScrollOlder => self.state.scroll_older(),
            KeyAction::ScrollNewer => self.state.scroll_newer(),
            KeyAction::PageOlder => {
                for _ in 0..page {
                    self.state.scroll_older();
                }
            }
            KeyAction::PageNewer => {
                for _ in 0..page {
                    self.state.scroll_newer();
                }
            }
            KeyAction::JumpOldest => self.state.jump_oldest(),
            KeyAction::JumpNewest => self.state.jump_newest(),
            KeyAction::ToggleTimestamps => self.state.toggle_timestamps(),
            KeyAction::Clear => self.state.clear(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// React to a terminal resize: new bounds, new surface grid.
    fn handle_resize(&mut self, width: u16, height: u16) -> Result<(), TuiError> {
        let area = Rect::new(0, 0, width, height);
        debug!(?area, "terminal resized");
        self.state.set_bounds(area);
        self.surface.resize(area)?;
        Ok(())
    }

    /// Paint the view through the shared surface, then present the grid.
    fn draw(&mut self) -> Result<(), TuiError> {
        TextView::for_state(&self.state, self.attrs).paint(&self.surface, self.state.bounds())?;

        let grid = self.surface.begin_draw()?;
        self.terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            let grid: &Buffer = &grid;
            let area = buf.area.intersection(*grid.area());
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf[(x, y)] = grid[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}

/// Run the application with the given feed and resolved configuration.
///
/// Restores the terminal before returning, on success and on error alike.
pub fn run_with_feed(feed: LineFeed, config: &Config) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(feed, config) {
        Ok(app) => app,
        Err(err) => {
            // Raw mode may already be on; best effort before reporting.
            let _ = restore_terminal();
            return Err(err);
        }
    };
    let result = app.run();

    // Always restore terminal state.
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
