// Transformer: rewriting event streams with mode-scoped rules

use markstream_core::event::{build_events, Event};
use markstream_core::parser::parse_str;
use markstream_core::render::render;
use markstream_core::transform::{build_transformer, transform, Transformer};
use pretty_assertions::assert_eq;

fn html_to_markdown() -> Transformer {
    build_transformer(|t| {
        t.on_mark("h1", None, |s, _| {
            s.text("# ");
            s.children(Some("span"));
            s.text("\n\n");
        });
        t.on_mark("p", None, |s, _| {
            s.children(Some("span"));
            s.text("\n\n");
        });
        t.on_mark("em", Some("span"), |s, _| {
            s.text("*");
            s.children(Some("span"));
            s.text("*");
        });
    })
}

#[test]
fn test_markdown_emission_from_structured_events() {
    let events = build_events(|b| {
        b.scope("h1", |b| b.text("Title"));
        b.scope("p", |b| {
            b.text("Hello ");
            b.scope("em", |b| b.text("world"));
            b.text("!");
        });
    });
    let transformer = html_to_markdown();
    let out = render(transform(events, &transformer));
    assert_eq!(out, "# Title\n\nHello *world*!\n\n");
}

#[test]
fn test_full_pipeline_parse_transform_render() {
    let transformer = html_to_markdown();
    let events = parse_str("# Hi\n*emph*!");
    let out = render(transform(events, &transformer));
    assert_eq!(out, "# Hi\n\n*emph*!\n\n");
}

#[test]
fn test_rules_fire_in_registration_order() {
    let transformer = build_transformer(|t| {
        t.on_mark("x", None, |s, _| {
            s.text("first");
            s.children(None);
        });
        t.on_mark("x", None, |s, _| {
            s.text("second");
            s.children(None);
        });
    });
    let events = build_events(|b| b.scope("x", |_| {}));
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(out, vec![Event::text("first")]);
}

#[test]
fn test_mode_restricts_matching_depth() {
    let transformer = build_transformer(|t| {
        t.on_mark("p", None, |s, _| s.children(Some("inline")));
        t.on_mark("em", Some("inline"), |s, _| {
            s.text("*");
            s.children(Some("inline"));
            s.text("*");
        });
    });
    // a top-level em does not match the inline-scoped rule
    let events = build_events(|b| b.scope("em", |b| b.text("x")));
    let out: Vec<Event> = transform(events.clone(), &transformer).collect();
    assert_eq!(out, events);
}

#[test]
fn test_unmatched_marks_keep_mode_tracking() {
    let transformer = build_transformer(|t| {
        t.on_mark("p", None, |s, _| s.children(Some("inline")));
        t.on_mark("em", Some("inline"), |s, _| {
            s.text("*");
            s.children(Some("inline"));
            s.text("*");
        });
    });
    // strong is unmatched and forwarded, but em nested under it is still
    // in "inline" mode through the tracked stack
    let events = build_events(|b| {
        b.scope("p", |b| {
            b.scope("strong", |b| b.scope("em", |b| b.text("x")));
        });
    });
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(
        out,
        vec![
            Event::mark("strong"),
            Event::text("*"),
            Event::text("x"),
            Event::text("*"),
            Event::unmark("strong"),
        ]
    );
}

#[test]
fn test_predicate_matcher_sees_attributes() {
    let transformer = build_transformer(|t| {
        t.on_match(
            |e| e.attributes().and_then(|a| a.get("href")).is_some(),
            None,
            |s, e| {
                let href = e
                    .attributes()
                    .and_then(|a| a.get("href"))
                    .unwrap_or_default()
                    .to_string();
                s.children(None);
                s.text(format!(" ({href})"));
            },
        );
    });
    let mut attrs = markstream_core::Attributes::new();
    attrs.insert("href", "/doc");
    let events = vec![
        Event::mark_with("a", attrs),
        Event::text("link"),
        Event::unmark("a"),
    ];
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(out, vec![Event::text("link"), Event::text(" (/doc)")]);
}

#[test]
fn test_text_rule_rewrites_text() {
    let transformer = build_transformer(|t| {
        t.on_text(|s, text| s.text(text.replace("cat", "dog")));
    });
    let events = build_events(|b| b.scope("p", |b| b.text("a cat sat")));
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(
        out,
        vec![
            Event::mark("p"),
            Event::text("a dog sat"),
            Event::unmark("p"),
        ]
    );
}

#[test]
fn test_nested_mark_emission() {
    let transformer = build_transformer(|t| {
        t.on_mark("ns:note", None, |s, _| {
            s.mark("div", |s| {
                s.mark("p", |s| s.children(None));
            });
        });
    });
    let events = vec![
        Event::tag("ns:note"),
        Event::text("x"),
        Event::untag("ns:note"),
    ];
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(
        out,
        vec![
            Event::mark("div"),
            Event::mark("p"),
            Event::text("x"),
            Event::unmark("p"),
            Event::unmark("div"),
        ]
    );
}

#[test]
fn test_handler_without_children_drops_nothing_downstream() {
    let transformer = build_transformer(|t| {
        t.on_mark("em", None, |s, _| s.text("<em!>"));
    });
    let events = build_events(|b| {
        b.scope("em", |b| b.text("inner"));
        b.text("tail");
    });
    let out: Vec<Event> = transform(events, &transformer).collect();
    // the mark pair is replaced; its children still stream through
    assert_eq!(
        out,
        vec![
            Event::text("<em!>"),
            Event::text("inner"),
            Event::text("tail"),
        ]
    );
}

#[test]
fn test_stray_unmark_is_ignored_gracefully() {
    let transformer = build_transformer(|t| {
        t.on_mark("p", None, |s, _| s.children(None));
    });
    let events = vec![Event::unmark("p"), Event::text("x")];
    let out: Vec<Event> = transform(events, &transformer).collect();
    assert_eq!(out, vec![Event::unmark("p"), Event::text("x")]);
}
