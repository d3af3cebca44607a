//! Raw log line with timestamp prefix handling.

/// A single raw log entry.
///
/// By convention every line carries a timestamp prefix terminated by the
/// first `]`, e.g. `"[12:00:05] hello"`. The invariant is not enforced at
/// construction: a line without the delimiter is stored as-is and displayed
/// unstripped when timestamps are hidden, so a malformed producer can never
/// crash the paint loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine(String);

impl LogLine {
    /// Wrap an already-formatted line (timestamp prefix included).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Prefix a bare message with the current local time.
    ///
    /// Produces the `"[HH:MM:SS] message"` shape the rest of the crate
    /// expects.
    pub fn stamp(message: &str) -> Self {
        let now = chrono::Local::now();
        Self(format!("{} {}", now.format("[%H:%M:%S]"), message))
    }

    /// The full stored line, timestamp prefix included.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Whether the line carries the `]` timestamp delimiter.
    pub fn has_timestamp(&self) -> bool {
        self.0.contains(']')
    }

    /// The text to display for the current timestamp setting.
    ///
    /// With `show_timestamps` the full line is returned. Without it, the
    /// substring after the first `]` is returned with surrounding whitespace
    /// trimmed. A line missing the delimiter falls back to the full line.
    pub fn display_text(&self, show_timestamps: bool) -> &str {
        if show_timestamps {
            return &self.0;
        }
        match self.0.split_once(']') {
            Some((_, rest)) => rest.trim(),
            None => &self.0,
        }
    }
}

impl From<String> for LogLine {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for LogLine {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
