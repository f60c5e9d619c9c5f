// Structural comparison of event streams
//
// The parser is free to split one logical text run into several adjacent
// Text events (fast path, buffer flushes), so stream comparisons have to
// work on the coalesced form.

use crate::event::Event;

/// Coalesce adjacent `Text` events and drop empty ones. `Mark`/`Unmark`
/// events pass through untouched.
pub fn normalize<I: IntoIterator<Item = Event>>(events: I) -> Vec<Event> {
    let mut out: Vec<Event> = Vec::new();
    for event in events {
        match event {
            Event::Text { text } if text.is_empty() => {}
            Event::Text { text } => {
                if let Some(Event::Text { text: last }) = out.last_mut() {
                    last.push_str(&text);
                } else {
                    out.push(Event::Text { text });
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Structural equality modulo text fragmentation.
pub fn events_equal(
    a: impl IntoIterator<Item = Event>,
    b: impl IntoIterator<Item = Event>,
) -> bool {
    normalize(a) == normalize(b)
}

/// Assert two streams are structurally equal, panicking with both
/// normalized forms on mismatch.
pub fn assert_events(
    actual: impl IntoIterator<Item = Event>,
    expected: impl IntoIterator<Item = Event>,
) {
    let actual = normalize(actual);
    let expected = normalize(expected);
    assert_eq!(actual, expected, "event streams differ");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_adjacent_text_coalesces() {
        let split = vec![
            Event::mark("p"),
            Event::text("a"),
            Event::text("b"),
            Event::text(""),
            Event::text("c"),
            Event::unmark("p"),
        ];
        let joined = vec![Event::mark("p"), Event::text("abc"), Event::unmark("p")];
        assert!(events_equal(split, joined));
    }

    #[test]
    fn smoke_test_marks_are_not_merged() {
        let a = vec![Event::mark("em"), Event::unmark("em")];
        let b = vec![Event::mark("strong"), Event::unmark("strong")];
        assert!(!events_equal(a, b));
    }
}
