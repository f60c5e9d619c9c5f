// Blockquote handling: `> ` continuation with one inner level
//
// The inner content is either a paragraph or a flat unordered list.
// A blank line (or a line without the `> ` prefix) closes the quote.

use super::BlockState;
use crate::parser::Parser;

impl Parser {
    pub(crate) fn quote_pending_char(&mut self, c: char) {
        if !self.quote_inner {
            // waiting for the "> " continuation prefix
            if c == '\n' {
                if self.line.is_empty() {
                    self.close_quote();
                    self.enter_start();
                    return;
                }
                let line = std::mem::take(&mut self.line);
                self.close_quote();
                self.enter_start();
                self.redispatch(&line, true);
                return;
            }
            self.line.push(c);
            if self.line == ">" {
                return;
            }
            if self.line == "> " {
                self.line.clear();
                self.quote_inner = true;
                return;
            }
            let line = std::mem::take(&mut self.line);
            self.close_quote();
            self.enter_start();
            self.redispatch(&line, false);
            return;
        }
        // past the prefix: decide between a list item and paragraph text
        if c == '\n' {
            if self.line.is_empty() {
                // a bare "> " line closes whatever is open inside
                self.quote_close_inner();
                self.pending = true;
                self.quote_inner = false;
                return;
            }
            let line = std::mem::take(&mut self.line);
            self.quote_inner_commit(&line);
            self.process_char('\n');
            return;
        }
        self.line.push(c);
        if self.line == "-" {
            return;
        }
        let line = std::mem::take(&mut self.line);
        self.quote_inner_commit(&line);
    }

    /// Commit the content after a `> ` prefix, joining or restructuring
    /// the quote's inner block as needed.
    pub(crate) fn quote_inner_commit(&mut self, line: &str) {
        self.pending = false;
        self.quote_inner = false;
        if let Some(rest) = line.strip_prefix("- ") {
            if self.quote_has("p") {
                self.line_end_hard();
                self.pop_to_name("p");
            }
            if !self.quote_has("ul") {
                self.push_mark("ul", false, None);
            }
            self.push_mark("li", false, None);
            self.block = BlockState::BlockquoteList;
            self.replay(rest);
        } else {
            if self.quote_has("p") {
                self.inline_newline_join();
            } else {
                if self.quote_has("ul") {
                    self.line_end_hard();
                    self.pop_to_name("ul");
                }
                self.push_mark("p", false, None);
            }
            self.block = BlockState::Blockquote;
            self.replay(line);
        }
    }

    fn quote_close_inner(&mut self) {
        self.line_end_hard();
        self.pop_above_name("blockquote");
        self.block = BlockState::Blockquote;
    }

    pub(crate) fn close_quote(&mut self) {
        self.line_end_hard();
        self.pop_to_name("blockquote");
    }
}
