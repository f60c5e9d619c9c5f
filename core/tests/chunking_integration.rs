// Chunk-boundary invariance: the defining streaming property
//
// For every input and every partition of it into chunks, the event
// stream must equal the single-chunk parse (modulo text fragmentation,
// which is contractual).

use markstream_core::event::Event;
use markstream_core::parser::{parse, parse_str};
use markstream_core::testing::{assert_events, events_equal};

const CORPUS: &[&str] = &[
    "# Hello\n**world**",
    "plain text across\ntwo lines\n\nand a second paragraph",
    "- one\n- two\n- [x] done\n\ntail",
    "1. first\n2. second",
    "> quoted *deep*\n> more\n\nafter",
    "> - qa\n> - qb",
    "```rust\nlet x = \"```\";\n```\n",
    "$$\n\\sum x_i\n$$\n",
    "| a | b |\n|---|---|\n| *1* | 2 |\n",
    "a `code` ``span `x` span`` b",
    "links [t](/u \"T\") and ![i](img.png) and <https://e.com/x>",
    "mail <a@b.cd> end",
    "escapes \\*x\\* \\\\ done",
    "sub~a~ sup^b^ ==hi== ~~del~~ $m$",
    "<foo:bar buzz=\"42\" fizz=\"a b\">\nprintln(\"Hello\")\n</foo:bar>\n",
    "<a:b>x</a:c>y</a:b>",
    "---\n#no heading\n####### seven\n## yes\n",
    "**unclosed\n\n`also unclosed",
    "[dangling](http://x",
    "< lonely angle\n",
];

fn single(input: &str) -> Vec<Event> {
    parse_str(input).collect()
}

#[test]
fn test_char_by_char_equals_single_chunk() {
    for input in CORPUS {
        let chars: Vec<String> = input.chars().map(|c| c.to_string()).collect();
        let split: Vec<Event> = parse(chars.iter().map(|s| s.as_str())).collect();
        assert_events(split, single(input));
    }
}

#[test]
fn test_every_two_way_split_equals_single_chunk() {
    for input in CORPUS {
        let whole = single(input);
        for (idx, _) in input.char_indices().skip(1) {
            let parts = [&input[..idx], &input[idx..]];
            let split: Vec<Event> = parse(parts).collect();
            assert!(
                events_equal(split.clone(), whole.clone()),
                "split at byte {idx} diverged for {input:?}:\n  split: {split:?}\n  whole: {whole:?}"
            );
        }
    }
}

#[test]
fn test_three_way_splits_on_a_marker_heavy_input() {
    let input = "## t *a*`c`\n<n:s k=\"v\">\nbody\n</n:s>\n| x |\n";
    let whole = single(input);
    let indices: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
    for (n, &i) in indices.iter().enumerate().skip(1) {
        for &j in indices.iter().skip(n + 1) {
            let parts = [&input[..i], &input[i..j], &input[j..]];
            let split: Vec<Event> = parse(parts).collect();
            assert!(
                events_equal(split, whole.clone()),
                "split at bytes {i},{j} diverged"
            );
        }
    }
}

#[test]
fn test_empty_chunks_are_harmless() {
    let parts = ["", "# a", "", "\nb", ""];
    let split: Vec<Event> = parse(parts).collect();
    assert_events(split, single("# a\nb"));
}

#[test]
fn test_no_chunks_produce_no_events() {
    let none: [&str; 0] = [];
    let events: Vec<Event> = parse(none).collect();
    assert!(events.is_empty());
}

#[test]
fn test_parser_is_reusable_after_finalize() {
    let mut parser = markstream_core::Parser::new();
    let mut first = parser.feed("# a");
    first.extend(parser.finalize());
    let mut second = parser.feed("# a");
    second.extend(parser.finalize());
    assert_eq!(first, second);
}

#[test]
fn test_stream_is_pulled_lazily() {
    use std::cell::Cell;

    let consumed = Cell::new(0usize);
    let chunks = ["# title\n", "body\n", "tail"];
    let counting = chunks.iter().inspect(|_| consumed.set(consumed.get() + 1));
    let mut events = parse(counting.map(|s| *s));

    let first = events.next();
    assert_eq!(first, Some(Event::mark("h1")));
    assert_eq!(consumed.get(), 1, "one chunk disambiguates the heading");
    drop(events);
}

#[test]
fn test_consuming_every_event_terminates() {
    for input in CORPUS {
        let count = parse_str(input).count();
        assert!(count > 0);
    }
}
