// Pretty printer: block tags on their own lines, inline tags in place
//
// Total over malformed streams: stray closes never underflow the depth
// and never panic. Text inside `pre` is written verbatim; everywhere
// else it is escaped and re-indented after embedded newlines.

use crate::event::{Attributes, Event};

use super::escape::{escape_attribute, push_text_char};
use super::options::RenderOptions;

/// Names rendered as block elements: own line, children indented. Any
/// namespaced name (containing `:`) is a block as well.
pub(crate) fn is_block_name(name: &str) -> bool {
    if name.contains(':') {
        return true;
    }
    matches!(
        name,
        "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "nav"
            | "aside"
            | "main"
            | "p"
            | "pre"
            | "ul"
            | "ol"
            | "li"
            | "dl"
            | "dt"
            | "dd"
            | "table"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "th"
            | "td"
            | "blockquote"
            | "figure"
            | "figcaption"
            | "details"
            | "summary"
            | "footnote"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

/// Render an event stream with the default two-space indentation.
pub fn render<I: IntoIterator<Item = Event>>(events: I) -> String {
    render_with(events, &RenderOptions::default())
}

/// Render an event stream with explicit options.
pub fn render_with<I: IntoIterator<Item = Event>>(events: I, options: &RenderOptions) -> String {
    log::debug!("rendering event stream");
    let mut writer = Writer::new(options);
    let mut events = events.into_iter().peekable();
    while let Some(event) = events.next() {
        match event {
            Event::Text { text } => writer.text(&text),
            Event::Mark {
                name, attributes, ..
            } => {
                let childless = matches!(
                    events.peek(),
                    Some(Event::Unmark { name: next, .. }) if *next == name
                );
                if childless {
                    events.next();
                    writer.childless(&name, attributes.as_ref());
                } else {
                    writer.open(&name, attributes.as_ref());
                }
            }
            Event::Unmark { name, .. } => writer.close(&name),
        }
    }
    writer.finish()
}

struct Writer<'a> {
    out: String,
    depth: usize,
    pre_depth: usize,
    at_line_start: bool,
    /// The last output character is a structural newline the printer
    /// appended itself; it is trimmed at the end of the document.
    trailing_structural: bool,
    options: &'a RenderOptions,
}

impl<'a> Writer<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            pre_depth: 0,
            at_line_start: true,
            trailing_structural: false,
            options,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth * self.options.indent {
            self.out.push(' ');
        }
    }

    fn break_line(&mut self) {
        if !self.at_line_start {
            self.out.push('\n');
            self.at_line_start = true;
        }
    }

    fn write_open_tag(&mut self, name: &str, attributes: Option<&Attributes>) {
        self.out.push('<');
        self.out.push_str(name);
        if let Some(attributes) = attributes {
            for (key, value) in attributes.iter() {
                self.out.push(' ');
                self.out.push_str(key);
                self.out.push_str("=\"");
                self.out.push_str(&escape_attribute(value));
                self.out.push('"');
            }
        }
        self.out.push('>');
    }

    fn open(&mut self, name: &str, attributes: Option<&Attributes>) {
        if is_block_name(name) {
            self.break_line();
            self.indent();
            self.write_open_tag(name, attributes);
            self.out.push('\n');
            self.at_line_start = true;
            self.trailing_structural = true;
            self.depth += 1;
            if name == "pre" {
                self.pre_depth += 1;
            }
        } else {
            if self.at_line_start && self.pre_depth == 0 {
                self.indent();
            }
            self.write_open_tag(name, attributes);
            self.at_line_start = false;
            self.trailing_structural = false;
        }
    }

    fn close(&mut self, name: &str) {
        if is_block_name(name) {
            self.depth = self.depth.saturating_sub(1);
            if name == "pre" {
                self.pre_depth = self.pre_depth.saturating_sub(1);
            }
            self.break_line();
            self.indent();
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
            self.out.push('\n');
            self.at_line_start = true;
            self.trailing_structural = true;
        } else {
            if self.at_line_start && self.pre_depth == 0 {
                self.indent();
            }
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
            self.at_line_start = false;
            self.trailing_structural = false;
        }
    }

    /// A mark immediately followed by its own unmark collapses onto a
    /// single line.
    fn childless(&mut self, name: &str, attributes: Option<&Attributes>) {
        if is_block_name(name) {
            self.break_line();
            self.indent();
            self.write_open_tag(name, attributes);
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
            self.out.push('\n');
            self.at_line_start = true;
            self.trailing_structural = true;
        } else {
            if self.at_line_start && self.pre_depth == 0 {
                self.indent();
            }
            self.write_open_tag(name, attributes);
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
            self.at_line_start = false;
            self.trailing_structural = false;
        }
    }

    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pre_depth > 0 {
            self.out.push_str(text);
            self.at_line_start = text.ends_with('\n');
            self.trailing_structural = false;
            return;
        }
        for c in text.chars() {
            if c == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    self.indent();
                    self.at_line_start = false;
                }
                push_text_char(&mut self.out, c);
            }
        }
        self.trailing_structural = false;
    }

    fn finish(mut self) -> String {
        if self.trailing_structural && self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::build_events;

    #[test]
    fn smoke_test_block_and_inline_layout() {
        let events = build_events(|b| {
            b.scope("h1", |b| b.text("Hello"));
            b.scope("p", |b| {
                b.scope("strong", |b| b.text("world"));
            });
        });
        assert_eq!(
            render(events),
            "<h1>\n  Hello\n</h1>\n<p>\n  <strong>world</strong>\n</p>"
        );
    }

    #[test]
    fn smoke_test_childless_collapse() {
        let events = vec![Event::mark("hr"), Event::unmark("hr")];
        assert_eq!(render(events), "<hr></hr>");
    }

    #[test]
    fn smoke_test_text_escaping_outside_pre() {
        let events = build_events(|b| b.scope("p", |b| b.text("1 < 2 and 3 > 2")));
        assert_eq!(render(events), "<p>\n  1 &lt; 2 and 3 &gt; 2\n</p>");
    }

    #[test]
    fn smoke_test_pre_is_verbatim() {
        let events = build_events(|b| {
            let mut attrs = crate::event::Attributes::new();
            attrs.insert("class", "code");
            b.scope_with("pre", attrs, |b| b.text("a < b\n"));
        });
        assert_eq!(render(events), "<pre class=\"code\">\na < b\n</pre>");
    }

    #[test]
    fn smoke_test_attribute_escaping() {
        let mut attrs = crate::event::Attributes::new();
        attrs.insert("title", "say \"hi\"");
        let events = vec![Event::mark_with("a", attrs), Event::text("x"), Event::unmark("a")];
        assert_eq!(render(events), "<a title=\"say &quot;hi&quot;\">x</a>");
    }

    #[test]
    fn smoke_test_unbalanced_stream_is_total() {
        let events = vec![Event::unmark("p"), Event::mark("p"), Event::text("x")];
        let out = render(events);
        assert!(out.contains("<p>"));
    }
}
