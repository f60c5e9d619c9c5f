// Custom markup bodies: raw text until the literal closing tag
//
// Inside `<ns:name>` content is passed through without Markdown
// processing. A `<` opens a tentative closing-tag buffer that either
// grows into `</ns:name>` or gets flushed verbatim. One newline directly
// after the opening tag and one directly before the closing tag are
// consumed rather than emitted.

use super::BlockState;
use crate::parser::Parser;

impl Parser {
    pub(crate) fn markup_char(&mut self, c: char) {
        if self.skip_tag_newline {
            self.skip_tag_newline = false;
            if c == '\n' {
                return;
            }
        }
        if !self.close_probe.is_empty() {
            let tag = match &self.block {
                BlockState::CustomMarkup(tag) => tag.clone(),
                _ => return,
            };
            self.close_probe.push(c);
            let target = format!("</{tag}>");
            if self.close_probe == target {
                self.close_probe.clear();
                self.hold_newline = false;
                self.pop_to_name(&tag);
                self.enter_start();
                return;
            }
            if target.starts_with(self.close_probe.as_str()) {
                return;
            }
            // mismatch: everything buffered before this character was
            // ordinary content after all
            self.close_probe.pop();
            let buffered = std::mem::take(&mut self.close_probe);
            if self.hold_newline {
                self.hold_newline = false;
                self.emit_text("\n");
            }
            self.emit_text(buffered);
            self.markup_body_char(c);
            return;
        }
        self.markup_body_char(c);
    }

    fn markup_body_char(&mut self, c: char) {
        match c {
            '<' => self.close_probe.push('<'),
            '\n' => {
                if self.hold_newline {
                    self.emit_text("\n");
                }
                self.hold_newline = true;
            }
            _ => {
                if self.hold_newline {
                    self.hold_newline = false;
                    self.emit_text("\n");
                }
                self.emit_char(c);
            }
        }
    }
}
