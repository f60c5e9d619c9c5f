// End-to-end rendering: parse → pretty-printed output

use markstream_core::parser::parse_str;
use markstream_core::render::{render, render_with, RenderOptions};
use markstream_core::{build_events, Event};
use pretty_assertions::assert_eq;

fn rendered(input: &str) -> String {
    render(parse_str(input))
}

#[test]
fn test_heading_and_bold_paragraph() {
    assert_eq!(
        rendered("# Hello\n**world**"),
        "<h1>\n  Hello\n</h1>\n<p>\n  <strong>world</strong>\n</p>"
    );
}

#[test]
fn test_angle_brackets_escape() {
    assert_eq!(
        rendered("1 < 2 and 3 > 2"),
        "<p>\n  1 &lt; 2 and 3 &gt; 2\n</p>"
    );
}

#[test]
fn test_ampersand_escapes() {
    assert_eq!(rendered("a && b"), "<p>\n  a &amp;&amp; b\n</p>");
}

#[test]
fn test_task_list_layout() {
    let expected = "<ul>\n  <li>\n    <input type=\"checkbox\"></input>a\n  </li>\n  <li>\n    <input type=\"checkbox\" checked=\"true\"></input>b\n  </li>\n</ul>";
    assert_eq!(rendered("- [ ] a\n- [x] b"), expected);
}

#[test]
fn test_pre_content_is_verbatim() {
    assert_eq!(
        rendered("```\n1 < 2 && *x*\n```"),
        "<pre class=\"code\">\n1 < 2 && *x*\n</pre>"
    );
}

#[test]
fn test_empty_code_block_collapses() {
    assert_eq!(rendered("```\n```"), "<pre class=\"code\"></pre>");
}

#[test]
fn test_hr_collapses_on_one_line() {
    assert_eq!(rendered("---\n"), "<hr></hr>");
}

#[test]
fn test_custom_markup_renders_as_block() {
    assert_eq!(
        rendered("<foo:bar buzz=\"42\">\nprintln(\"Hello\")\n</foo:bar>\n"),
        "<foo:bar buzz=\"42\">\n  println(\"Hello\")\n</foo:bar>"
    );
}

#[test]
fn test_link_attributes_render_in_order() {
    assert_eq!(
        rendered("[t](/u \"T\")"),
        "<p>\n  <a href=\"/u\" title=\"T\">t</a>\n</p>"
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    let mut attrs = markstream_core::Attributes::new();
    attrs.insert("data", "a<b>\"c\"&d");
    let events = vec![Event::tag_with("n:s", attrs), Event::untag("n:s")];
    assert_eq!(
        render(events),
        "<n:s data=\"a&lt;b&gt;&quot;c&quot;&amp;d\"></n:s>"
    );
}

#[test]
fn test_text_newlines_reindent() {
    assert_eq!(
        rendered("a\nb"),
        "<p>\n  a\n  b\n</p>"
    );
}

#[test]
fn test_blockquote_nesting_layout() {
    assert_eq!(
        rendered("> - x"),
        "<blockquote>\n  <ul>\n    <li>\n      x\n    </li>\n  </ul>\n</blockquote>"
    );
}

#[test]
fn test_custom_indent_width() {
    let events = build_events(|b| b.scope("p", |b| b.text("x")));
    let options = RenderOptions { indent: 4 };
    assert_eq!(render_with(events, &options), "<p>\n    x\n</p>");
}

#[test]
fn test_render_is_factoring_independent() {
    // the same structural sequence renders identically no matter how the
    // builder program factored it
    let one = build_events(|b| {
        b.scope("p", |b| {
            b.text("ab");
            b.scope("em", |b| b.text("c"));
        });
    });
    let other = build_events(|b| {
        b.mark("p");
        b.text("a");
        b.text("b");
        b.scope("em", |b| b.text("c"));
        b.unmark("p");
    });
    assert_eq!(render(one), render(other));
}

#[test]
fn test_malformed_stream_renders_without_panic() {
    let events = vec![
        Event::unmark("div"),
        Event::mark("p"),
        Event::text("x"),
        Event::unmark("span"),
    ];
    let out = render(events);
    assert!(out.contains("x"));
}
