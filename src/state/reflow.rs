//! Reflow engine: greedy character wrapping of raw log lines.

use crate::model::LogLine;

/// Recompute the reflowed representation of a raw log.
///
/// Each line contributes its display text (timestamp-stripped when
/// `show_timestamps` is false, see [`LogLine::display_text`]) wrapped to
/// `width` columns. Wrapping counts Unicode code points, not bytes and not
/// display width: the paint routine assigns one char per grid cell.
///
/// A zero width or an empty log produces an empty result rather than an
/// error; the view simply renders nothing.
pub fn reflow(lines: &[LogLine], width: u16, show_timestamps: bool) -> Vec<String> {
    if width == 0 || lines.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        wrap_into(line.display_text(show_timestamps), width as usize, &mut rows);
    }
    rows
}

/// Append the wrapped rows of a single line to `rows`.
///
/// Emits a row each time `width` chars accumulate and a final non-empty
/// remainder. A line that exactly fills its rows emits no trailing empty
/// row; an empty line emits nothing.
fn wrap_into(text: &str, width: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    let mut count = 0;
    for ch in text.chars() {
        if count == width {
            rows.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if count > 0 {
        rows.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<LogLine> {
        raw.iter().map(|s| LogLine::new(*s)).collect()
    }

    #[test]
    fn zero_width_produces_no_rows() {
        let log = lines(&["[12:00] hello"]);
        assert!(reflow(&log, 0, true).is_empty());
    }

    #[test]
    fn empty_log_produces_no_rows() {
        assert!(reflow(&[], 80, true).is_empty());
    }

    #[test]
    fn stripped_line_wraps_at_width_ten() {
        // Worked example: "[12:00] hello world" at width 10 without
        // timestamps wraps to "hello worl" / "d".
        let log = lines(&["[12:00] hello world"]);
        let rows = reflow(&log, 10, false);
        assert_eq!(rows, vec!["hello worl".to_string(), "d".to_string()]);
    }

    #[test]
    fn exact_fit_emits_no_trailing_empty_row() {
        // "1234567890" is exactly 10 chars after stripping.
        let log = lines(&["[12:00] 1234567890"]);
        let rows = reflow(&log, 10, false);
        assert_eq!(rows, vec!["1234567890".to_string()]);
    }

    #[test]
    fn exact_double_fit_emits_two_full_rows() {
        let log = lines(&["[12:00] 12345678901234567890"]);
        let rows = reflow(&log, 10, false);
        assert_eq!(
            rows,
            vec!["1234567890".to_string(), "1234567890".to_string()]
        );
    }

    #[test]
    fn full_line_wraps_when_timestamps_shown() {
        let log = lines(&["[12:00] abc"]);
        let rows = reflow(&log, 5, true);
        assert_eq!(
            rows,
            vec!["[12:0".to_string(), "0] ab".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn line_without_delimiter_is_wrapped_unstripped() {
        let log = lines(&["no delimiter"]);
        let rows = reflow(&log, 6, false);
        assert_eq!(rows, vec!["no del".to_string(), "imiter".to_string()]);
    }

    #[test]
    fn multiple_lines_keep_chronological_order() {
        let log = lines(&["[1] first", "[2] second"]);
        let rows = reflow(&log, 80, false);
        assert_eq!(rows, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn timestamp_only_line_contributes_no_rows_when_stripped() {
        let log = lines(&["[12:00] "]);
        assert!(reflow(&log, 10, false).is_empty());
    }

    #[test]
    fn wrapping_counts_code_points_not_bytes() {
        // Five two-byte chars fit one width-5 row.
        let log = lines(&["[1] ééééé"]);
        let rows = reflow(&log, 5, false);
        assert_eq!(rows, vec!["ééééé".to_string()]);
    }

    #[test]
    fn reflow_is_deterministic() {
        let log = lines(&["[12:00] some text that wraps around", "[12:01] more"]);
        assert_eq!(reflow(&log, 7, false), reflow(&log, 7, false));
    }
}
