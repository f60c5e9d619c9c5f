// Fenced code blocks: verbatim content, no inline processing
//
// Content characters stream out as text the moment they arrive; only a
// line-leading backtick run is held back until it either proves to be
// the closing fence or gets flushed as ordinary content.

use super::BlockState;
use crate::event::Attributes;
use crate::parser::Parser;

impl Parser {
    pub(crate) fn open_code_block(&mut self, lang: &str) {
        let mut attrs = Attributes::new();
        let class = if lang.is_empty() {
            "code".to_string()
        } else {
            format!("code lang-{lang}")
        };
        attrs.insert("class", class);
        self.push_mark("pre", false, Some(attrs));
        self.block = BlockState::CodeBlock(3);
        self.pending = false;
        self.at_line_start = true;
        self.probe.clear();
    }

    pub(crate) fn code_block_char(&mut self, c: char) {
        let fence_len = match self.block {
            BlockState::CodeBlock(len) => len,
            _ => return,
        };
        if self.at_line_start {
            if c == '`' {
                self.probe.push('`');
                return;
            }
            if !self.probe.is_empty() {
                if c == '\n' {
                    if self.probe.len() >= fence_len {
                        self.probe.clear();
                        self.pop_to_name("pre");
                        self.enter_start();
                    } else {
                        let probe = std::mem::take(&mut self.probe);
                        self.emit_text(probe);
                        self.emit_text("\n");
                    }
                    return;
                }
                let probe = std::mem::take(&mut self.probe);
                self.emit_text(probe);
                self.at_line_start = false;
                self.emit_char(c);
                return;
            }
            if c == '\n' {
                self.emit_text("\n");
                return;
            }
            self.at_line_start = false;
            self.emit_char(c);
            return;
        }
        if c == '\n' {
            self.emit_text("\n");
            self.at_line_start = true;
            return;
        }
        self.emit_char(c);
    }
}
