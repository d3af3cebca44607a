//! Foreground/background attribute pair for the text view.

use ratatui::style::{Color, Style};
use std::str::FromStr;
use tracing::warn;

/// Opaque fg/bg pair the view stores and passes through to the paint
/// primitive.
///
/// Keeps the scrollback component decoupled from any particular terminal
/// backend's attribute representation: the component never inspects the
/// colors, it only forwards them to every painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAttrs {
    /// Foreground color applied to every painted cell.
    pub fg: Color,
    /// Background color applied to every painted cell.
    pub bg: Color,
}

impl TextAttrs {
    /// Pair with explicit colors.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Resolve color names from configuration.
    ///
    /// Accepts the names `ratatui::style::Color` parses ("white", "cyan",
    /// "#rrggbb", ...). An unparseable name falls back to the terminal
    /// default and is logged, never an error.
    pub fn from_names(fg: Option<&str>, bg: Option<&str>) -> Self {
        Self {
            fg: parse_color(fg),
            bg: parse_color(bg),
        }
    }

    /// The cell style for this pair.
    pub fn as_style(self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

impl Default for TextAttrs {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

fn parse_color(name: Option<&str>) -> Color {
    match name {
        None => Color::Reset,
        Some(name) => Color::from_str(name).unwrap_or_else(|_| {
            warn!(name, "unknown color name in config; using terminal default");
            Color::Reset
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_terminal_colors() {
        let attrs = TextAttrs::default();
        assert_eq!(attrs.fg, Color::Reset);
        assert_eq!(attrs.bg, Color::Reset);
    }

    #[test]
    fn from_names_parses_known_colors() {
        let attrs = TextAttrs::from_names(Some("cyan"), Some("black"));
        assert_eq!(attrs.fg, Color::Cyan);
        assert_eq!(attrs.bg, Color::Black);
    }

    #[test]
    fn from_names_falls_back_on_unknown_color() {
        let attrs = TextAttrs::from_names(Some("not-a-color"), None);
        assert_eq!(attrs.fg, Color::Reset);
        assert_eq!(attrs.bg, Color::Reset);
    }

    #[test]
    fn as_style_carries_both_colors() {
        let style = TextAttrs::new(Color::White, Color::Blue).as_style();
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Blue));
    }
}
