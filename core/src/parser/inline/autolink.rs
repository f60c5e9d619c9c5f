// Autolinks: `<https://…>` and `<user@host>` inside flowing text
//
// A `<` starts a probe that accepts any run without whitespace or a
// second `<`. The closing `>` classifies the content; anything that is
// not a link flushes verbatim, including the angle brackets.

use crate::event::{Attributes, Event};
use crate::grammar::{classify_autolink, Autolink};
use crate::parser::Parser;

impl Parser {
    pub(crate) fn autolink_char(&mut self, c: char) {
        if c == '>' {
            let buffer = std::mem::take(&mut self.inline.buffer);
            let content = &buffer[1..];
            match classify_autolink(content) {
                Some(Autolink::Uri) => self.emit_autolink(&content.to_string(), content),
                Some(Autolink::Email) => {
                    let href = format!("mailto:{content}");
                    self.emit_autolink(&href, content);
                }
                None => {
                    let mut literal = buffer;
                    literal.push('>');
                    self.emit_text(literal);
                }
            }
            return;
        }
        if c == ' ' || c == '\t' || c == '<' {
            let buffer = std::mem::take(&mut self.inline.buffer);
            self.emit_text(buffer);
            self.inline_char(c);
            return;
        }
        self.inline.buffer.push(c);
    }

    fn emit_autolink(&mut self, href: &str, text: &str) {
        let mut attrs = Attributes::new();
        attrs.insert("href", href);
        self.emit(Event::mark_with("a", attrs));
        self.emit_text(text.to_string());
        self.emit(Event::unmark("a"));
    }
}
