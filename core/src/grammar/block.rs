// Block-level line patterns: fences, rules, table separators

use std::sync::LazyLock;

use nom::bytes::complete::{tag, take_while};
use nom::character::complete::digit1;
use nom::{IResult, Parser};
use regex::Regex;

/// Table header separator row, e.g. `|---|:--:|`.
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|[-:|\s]+\|$").unwrap_or_else(|e| panic!("invalid separator pattern: {e}"))
});

/// Recognize a fence-opening line and return its info string.
///
/// Exactly three backticks followed by an optional language restricted to
/// `[a-zA-Z0-9]*`. Anything else on the line disqualifies it.
pub fn fence_open(line: &str) -> Option<&str> {
    let result: IResult<&str, &str> = (tag("```"), take_while(|c: char| c.is_ascii_alphanumeric()))
        .map(|(_, lang)| lang)
        .parse(line);
    match result {
        Ok(("", lang)) => Some(lang),
        _ => None,
    }
}

/// A thematic break is a full line of three or more dashes.
pub fn thematic_break(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// A display-math fence is a line holding exactly `$$`.
pub fn math_fence(line: &str) -> bool {
    line == "$$"
}

/// Whether a complete line separates a table header from its body.
pub fn table_separator(line: &str) -> bool {
    TABLE_SEPARATOR.is_match(line)
}

/// Recognize an ordered-list marker prefix (`12. `), returning the number
/// of bytes it occupies.
pub fn ordered_marker(line: &str) -> Option<usize> {
    let result: IResult<&str, &str> = (digit1, tag(". ")).map(|(digits, _)| digits).parse(line);
    match result {
        Ok((_, digits)) => Some(digits.len() + 2),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_fence_open() {
        assert_eq!(fence_open("```"), Some(""));
        assert_eq!(fence_open("```rust"), Some("rust"));
        assert_eq!(fence_open("```c99"), Some("c99"));
        assert_eq!(fence_open("``"), None);
        assert_eq!(fence_open("````"), None);
        assert_eq!(fence_open("```my lang"), None);
        assert_eq!(fence_open("```rust extra"), None);
    }

    #[test]
    fn smoke_test_thematic_break() {
        assert!(thematic_break("---"));
        assert!(thematic_break("----------"));
        assert!(!thematic_break("--"));
        assert!(!thematic_break("--- "));
        assert!(!thematic_break("-*-"));
    }

    #[test]
    fn smoke_test_table_separator() {
        assert!(table_separator("|---|---|"));
        assert!(table_separator("| :-- | --: |"));
        assert!(table_separator("|:-:|"));
        assert!(!table_separator("|---"));
        assert!(!table_separator("| a |"));
    }

    #[test]
    fn smoke_test_ordered_marker() {
        assert_eq!(ordered_marker("1. x"), Some(3));
        assert_eq!(ordered_marker("42. y"), Some(4));
        assert_eq!(ordered_marker("1.x"), None);
        assert_eq!(ordered_marker("x. y"), None);
        assert_eq!(ordered_marker("1"), None);
    }
}
