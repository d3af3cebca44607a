//! Property-based tests for the reflow engine.
//!
//! Properties under test:
//! 1. Every reflowed row fits the viewport width (in chars).
//! 2. Concatenating the rows of one source line reproduces its display
//!    text with no characters dropped or duplicated.
//! 3. Reflow is deterministic across repeated calls.

use proptest::prelude::*;
use scrollback::model::LogLine;
use scrollback::state::reflow;

// ===== Arbitrary Strategies =====

/// Printable-ASCII message body; may itself contain ']' characters.
fn arb_message() -> impl Strategy<Value = String> {
    "[ -~]{0,60}"
}

/// Well-formed log line with a "[HH:MM]" timestamp prefix.
fn arb_line() -> impl Strategy<Value = LogLine> {
    ("[0-9]{2}", "[0-9]{2}", arb_message())
        .prop_map(|(h, m, msg)| LogLine::new(format!("[{h}:{m}] {msg}")))
}

/// Message with multi-byte chars mixed in, to catch byte/char confusion.
fn arb_unicode_line() -> impl Strategy<Value = LogLine> {
    prop::collection::vec(
        prop_oneof![Just('a'), Just('é'), Just('λ'), Just('語'), Just(' ')],
        0..40,
    )
    .prop_map(|chars| {
        let msg: String = chars.into_iter().collect();
        LogLine::new(format!("[12:00] {msg}"))
    })
}

proptest! {
    #[test]
    fn rows_never_exceed_width(
        lines in prop::collection::vec(arb_line(), 0..20),
        width in 1u16..40,
        show in any::<bool>(),
    ) {
        for row in reflow(&lines, width, show) {
            prop_assert!(
                row.chars().count() <= width as usize,
                "row {:?} wider than {}",
                row,
                width
            );
        }
    }

    #[test]
    fn concatenated_rows_reproduce_display_text(
        line in arb_line(),
        width in 1u16..40,
        show in any::<bool>(),
    ) {
        let rows = reflow(std::slice::from_ref(&line), width, show);
        let joined: String = rows.concat();
        prop_assert_eq!(joined, line.display_text(show).to_string());
    }

    #[test]
    fn concatenation_holds_for_unicode_content(
        line in arb_unicode_line(),
        width in 1u16..10,
        show in any::<bool>(),
    ) {
        let rows = reflow(std::slice::from_ref(&line), width, show);
        let joined: String = rows.concat();
        prop_assert_eq!(joined, line.display_text(show).to_string());
    }

    #[test]
    fn no_trailing_empty_rows(
        lines in prop::collection::vec(arb_line(), 0..20),
        width in 1u16..40,
        show in any::<bool>(),
    ) {
        for row in reflow(&lines, width, show) {
            prop_assert!(!row.is_empty(), "reflow emitted an empty row");
        }
    }

    #[test]
    fn reflow_is_deterministic(
        lines in prop::collection::vec(arb_line(), 0..20),
        width in 0u16..40,
        show in any::<bool>(),
    ) {
        prop_assert_eq!(
            reflow(&lines, width, show),
            reflow(&lines, width, show)
        );
    }
}
