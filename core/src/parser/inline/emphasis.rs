// Marker-run resolution: `*`/`_` emphasis, `~` twins, `=`, `!`
//
// Runs are ambiguous until the next non-run character arrives; a line
// end counts as that character. The pairs resolve immediately on their
// second marker: `~~` strikethrough, `==` highlight, a second backtick
// opens span collection.

use super::CodeSpan;
use super::LinkState;
use crate::parser::Parser;

impl Parser {
    /// Dispatch for a character arriving while the marker buffer holds
    /// something.
    pub(crate) fn buffered_char(&mut self, c: char) {
        if self.inline.buffer.starts_with('<') {
            self.autolink_char(c);
            return;
        }
        let marker = self.inline.buffer.chars().next().unwrap_or(' ');
        if c == marker {
            match marker {
                '*' | '_' => self.inline.buffer.push(c),
                '~' => {
                    self.inline.buffer.clear();
                    self.toggle_inline("del");
                }
                '=' => {
                    self.inline.buffer.clear();
                    self.toggle_inline("mark");
                }
                '`' => {
                    self.inline.buffer.clear();
                    self.inline.span = Some(CodeSpan::new());
                }
                '!' => {
                    // the older bang can no longer start an image
                    self.emit_text("!");
                }
                _ => {}
            }
            return;
        }
        if marker == '!' && c == '[' {
            self.inline.buffer.clear();
            self.inline.link = LinkState::Label {
                text: String::new(),
                image: true,
            };
            return;
        }
        self.resolve_marker_buffer();
        self.inline_char(c);
    }

    /// Resolve whatever sits in the marker buffer as if a plain character
    /// had arrived.
    pub(crate) fn resolve_marker_buffer(&mut self) {
        if self.inline.buffer.is_empty() {
            return;
        }
        if self.inline.buffer.starts_with('<') {
            let buffer = std::mem::take(&mut self.inline.buffer);
            self.emit_text(buffer);
            return;
        }
        let buffer = std::mem::take(&mut self.inline.buffer);
        let marker = buffer.chars().next().unwrap_or(' ');
        match marker {
            '*' | '_' => self.resolve_emphasis_run(buffer.len()),
            '~' => self.toggle_inline("sub"),
            '=' => self.emit_text("="),
            '!' => self.emit_text("!"),
            '`' => self.toggle_inline("code"),
            _ => {}
        }
    }

    fn resolve_emphasis_run(&mut self, len: usize) {
        match len {
            1 => self.toggle_inline("em"),
            2 => self.toggle_inline("strong"),
            _ => match (self.inline.italic, self.inline.bold) {
                (false, false) => {
                    self.toggle_inline("strong");
                    self.toggle_inline("em");
                }
                (true, true) => {
                    // close the inner one first so nothing cascades
                    if self.stack_depth_of("em") > self.stack_depth_of("strong") {
                        self.toggle_inline("em");
                        self.toggle_inline("strong");
                    } else {
                        self.toggle_inline("strong");
                        self.toggle_inline("em");
                    }
                }
                (true, false) => {
                    self.toggle_inline("em");
                    self.toggle_inline("strong");
                }
                (false, true) => {
                    self.toggle_inline("strong");
                    self.toggle_inline("em");
                }
            },
        }
    }
}
