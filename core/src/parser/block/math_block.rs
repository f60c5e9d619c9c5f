// Display math blocks: `$$` fences with verbatim content

use super::BlockState;
use crate::event::Attributes;
use crate::parser::Parser;

impl Parser {
    pub(crate) fn open_math_block(&mut self) {
        let mut attrs = Attributes::new();
        attrs.insert("display", "block");
        self.push_mark("math", false, Some(attrs));
        self.block = BlockState::MathBlock;
        self.pending = false;
        self.at_line_start = true;
        self.probe.clear();
    }

    pub(crate) fn math_block_char(&mut self, c: char) {
        if self.at_line_start {
            if c == '$' {
                self.probe.push('$');
                return;
            }
            if !self.probe.is_empty() {
                if c == '\n' {
                    // the closing fence is exactly two dollars on its own line
                    if self.probe == "$$" {
                        self.probe.clear();
                        self.pop_to_name("math");
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
