// JSON boundary: round-tripping whole parsed streams

use markstream_core::event::{events_from_json, events_to_json, from_json, to_json, Event};
use markstream_core::parser::parse_str;

#[test]
fn test_parsed_stream_round_trips() {
    let input = "# T\n**b** [l](/u \"t\")\n<ns:x k=\"v\">\nbody\n</ns:x>\n- [x] done";
    let events: Vec<Event> = parse_str(input).collect();
    let json = events_to_json(&events).expect("serialize");
    let back = events_from_json(&json).expect("deserialize");
    assert_eq!(back, events);
}

#[test]
fn test_every_event_round_trips_individually() {
    let events: Vec<Event> = parse_str("*a* <u@v.wx> `c` ~~d~~").collect();
    for event in events {
        let json = to_json(&event).expect("serialize");
        assert_eq!(from_json(&json).expect("deserialize"), event);
    }
}

#[test]
fn test_wire_shape_is_stable() {
    let events: Vec<Event> = parse_str("<foo:bar buzz=\"42\">x</foo:bar>").collect();
    let json = to_json(&events[0]).expect("serialize");
    assert_eq!(
        json,
        r#"{"type":"mark","name":"foo:bar","isTag":true,"attributes":{"buzz":"42"}}"#
    );
    let last = to_json(events.last().expect("closing event")).expect("serialize");
    assert_eq!(last, r#"{"type":"unmark","name":"foo:bar","isTag":true}"#);
}

#[test]
fn test_markdown_marks_omit_is_tag() {
    let events: Vec<Event> = parse_str("plain").collect();
    assert_eq!(
        to_json(&events[0]).expect("serialize"),
        r#"{"type":"mark","name":"p"}"#
    );
}

#[test]
fn test_malformed_input_fails_without_partial_success() {
    assert!(events_from_json("[{\"type\":\"text\",\"text\":\"ok\"},{\"type\":\"nope\"}]").is_err());
    assert!(from_json("{\"type\":\"mark\"}").is_err());
    assert!(from_json("{}").is_err());
    assert!(from_json("{\"type\":\"unmark\"}").is_err());
    assert!(from_json("not even json").is_err());
}
