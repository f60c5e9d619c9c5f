// Flat list handling: one line per item, no indentation nesting
//
// Indented continuation lines are deliberately unsupported; any line
// that is not another marker of the same list kind closes the list and
// is re-dispatched as a fresh block.

use super::{classify, BlockState, Classify};
use crate::event::{Attributes, Event};
use crate::parser::Parser;

impl Parser {
    pub(crate) fn list_pending_char(&mut self, c: char) {
        if c == '\n' {
            if self.line.is_empty() {
                self.close_list();
                self.enter_start();
                return;
            }
            let line = std::mem::take(&mut self.line);
            if self.list_try_continue(&line) {
                self.process_char('\n');
            } else {
                self.close_list();
                self.enter_start();
                self.redispatch(&line, true);
            }
            return;
        }
        self.line.push(c);
        match classify(&self.line, false) {
            Classify::NeedMore => {}
            cls => {
                let line = std::mem::take(&mut self.line);
                if self.matches_list_kind(&cls) {
                    self.list_item_from(cls, &line);
                } else {
                    self.close_list();
                    self.enter_start();
                    self.redispatch(&line, false);
                }
            }
        }
    }

    /// Commit a completed line as the next item if it matches the open
    /// list's marker kind.
    pub(crate) fn list_try_continue(&mut self, line: &str) -> bool {
        let cls = classify(line, true);
        if self.matches_list_kind(&cls) {
            self.list_item_from(cls, line);
            true
        } else {
            false
        }
    }

    fn matches_list_kind(&self, cls: &Classify) -> bool {
        let ordered = matches!(self.block, BlockState::OrderedList);
        match cls {
            Classify::Bullet | Classify::Checkbox { .. } => !ordered,
            Classify::Ordered { .. } => ordered,
            _ => false,
        }
    }

    fn list_item_from(&mut self, cls: Classify, line: &str) {
        self.pending = false;
        match cls {
            Classify::Bullet => {
                self.push_mark("li", false, None);
                self.replay(&line[2..]);
            }
            Classify::Checkbox { checked } => {
                self.open_checkbox_item(checked);
                self.replay(&line[6..]);
            }
            Classify::Ordered { consumed } => {
                self.push_mark("li", false, None);
                self.replay(&line[consumed..]);
            }
            _ => {}
        }
    }

    /// A task list item: the checkbox renders as an empty input element
    /// before the item text.
    pub(crate) fn open_checkbox_item(&mut self, checked: bool) {
        self.push_mark("li", false, None);
        let mut attrs = Attributes::new();
        attrs.insert("type", "checkbox");
        if checked {
            attrs.insert("checked", "true");
        }
        self.emit(Event::mark_with("input", attrs));
        self.emit(Event::unmark("input"));
    }

    pub(crate) fn close_list(&mut self) {
        let name = if matches!(self.block, BlockState::OrderedList) {
            "ol"
        } else {
            "ul"
        };
        self.line_end_hard();
        self.pop_to_name(name);
    }
}
