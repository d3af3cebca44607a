//! Reader-thread line feed with channel-based marshaling.

use crate::model::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Feeds text lines from a background reader onto the UI thread.
///
/// The scrollback state has no internal locking, so lines produced off the
/// UI thread must cross an `mpsc` channel and be appended by the event loop.
/// The reader thread exits at EOF or on error; the channel then reports
/// disconnected and [`LineFeed::drain`] keeps returning empty batches.
#[derive(Debug)]
pub struct LineFeed {
    rx: Receiver<String>,
}

impl LineFeed {
    /// Create a feed reading from stdin.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoInput`] when stdin is an interactive
    /// terminal: nothing would ever arrive and the TUI would sit on a blank
    /// screen.
    pub fn from_stdin() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::spawn(std::io::stdin()))
    }

    /// Create a feed reading from any source.
    ///
    /// Spawns the reader thread immediately.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let reader = BufReader::new(reader);
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            // Receiver dropped; UI is gone.
                            return;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "line feed read error; stopping");
                        return;
                    }
                }
            }
            debug!("line feed reached EOF");
        });
        Self { rx }
    }

    /// Take every line that has arrived since the last drain.
    ///
    /// Non-blocking; called by the UI loop on its tick.
    pub fn drain(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }

    /// Block up to `timeout` for the next line.
    ///
    /// Returns `None` on timeout or once the reader thread has exited.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<String> {
        match self.rx.recv_timeout(timeout) {
            Ok(line) => Some(line),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn feed_delivers_lines_in_order() {
        let feed = LineFeed::spawn(&b"first\nsecond\nthird\n"[..]);
        assert_eq!(feed.recv_timeout(WAIT), Some("first".to_string()));
        assert_eq!(feed.recv_timeout(WAIT), Some("second".to_string()));
        assert_eq!(feed.recv_timeout(WAIT), Some("third".to_string()));
    }

    #[test]
    fn feed_strips_newlines() {
        let feed = LineFeed::spawn(&b"line with newline\n"[..]);
        let line = feed.recv_timeout(WAIT).expect("line arrives");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn feed_reports_nothing_after_eof() {
        let feed = LineFeed::spawn(&b"only\n"[..]);
        assert_eq!(feed.recv_timeout(WAIT), Some("only".to_string()));
        assert_eq!(feed.recv_timeout(Duration::from_millis(200)), None);
        assert!(feed.drain().is_empty());
    }

    #[test]
    fn drain_returns_empty_batch_when_idle() {
        let feed = LineFeed::spawn(&b""[..]);
        // Give the reader thread a moment to hit EOF.
        let _ = feed.recv_timeout(Duration::from_millis(200));
        assert!(feed.drain().is_empty());
    }
}
