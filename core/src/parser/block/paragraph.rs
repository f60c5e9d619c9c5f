// Paragraph continuation across line boundaries
//
// A paragraph stays open while following lines still classify as
// paragraph text; the joined lines keep a literal newline between them
// and inline state (including unclosed formatting) carries across.

use super::{classify, Classify};
use crate::parser::Parser;

impl Parser {
    pub(crate) fn paragraph_pending_char(&mut self, c: char) {
        if c == '\n' {
            if self.line.is_empty() {
                self.finish_paragraph();
                self.enter_start();
                return;
            }
            let line = std::mem::take(&mut self.line);
            match classify(&line, true) {
                Classify::Paragraph => {
                    self.continue_paragraph(&line);
                    self.process_char('\n');
                }
                _ => {
                    self.finish_paragraph();
                    self.enter_start();
                    self.redispatch(&line, true);
                }
            }
            return;
        }
        self.line.push(c);
        match classify(&self.line, false) {
            Classify::NeedMore => {}
            Classify::Paragraph => {
                let line = std::mem::take(&mut self.line);
                self.continue_paragraph(&line);
            }
            _ => {
                let line = std::mem::take(&mut self.line);
                self.finish_paragraph();
                self.enter_start();
                self.redispatch(&line, false);
            }
        }
    }

    pub(crate) fn continue_paragraph(&mut self, line: &str) {
        self.pending = false;
        self.inline_newline_join();
        self.replay(line);
    }

    pub(crate) fn finish_paragraph(&mut self) {
        self.line_end_hard();
        self.pop_to_name("p");
    }
}
