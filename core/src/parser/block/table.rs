// Tables: streaming header row, line-buffered continuation rows
//
// The first `|` commits the table and the header row streams cell by
// cell. Every later row has to be buffered as a whole line, because the
// header/body separator is only recognizable once complete.

use super::BlockState;
use crate::grammar;
use crate::parser::Parser;

impl Parser {
    pub(crate) fn table_char(&mut self, c: char) {
        if self.inline.escaped {
            self.inline_char(c);
            return;
        }
        match c {
            '\n' => {
                if self.cell_open {
                    self.close_cell();
                }
                self.pop_to_name("tr");
                self.pending = true;
                self.line.clear();
            }
            '|' => {
                if self.cell_open {
                    self.close_cell();
                }
            }
            ' ' => {
                if self.cell_open {
                    self.cell_space.push(' ');
                } else {
                    // leading cell padding is dropped
                }
            }
            _ => {
                if !self.cell_open {
                    let cell = self.cell_name();
                    self.push_mark(cell, false, None);
                    self.cell_open = true;
                } else if !self.cell_space.is_empty() {
                    // interior spaces re-enter the inline machine
                    let spaces = std::mem::take(&mut self.cell_space);
                    for _ in 0..spaces.len() {
                        self.inline_char(' ');
                    }
                }
                self.inline_char(c);
            }
        }
    }

    pub(crate) fn table_pending_char(&mut self, c: char) {
        if c == '\n' {
            if self.line.is_empty() {
                self.close_table();
                self.enter_start();
                return;
            }
            let line = std::mem::take(&mut self.line);
            if self.table_try_continue(&line) {
                return;
            }
            self.close_table();
            self.enter_start();
            self.redispatch(&line, true);
            return;
        }
        if self.line.is_empty() && c != '|' {
            // not a table row at all; close and hand over immediately
            self.close_table();
            self.enter_start();
            self.process_char(c);
            return;
        }
        self.line.push(c);
    }

    /// Consume a completed line as the separator row or another table
    /// row. Returns false when the line does not belong to the table.
    pub(crate) fn table_try_continue(&mut self, line: &str) -> bool {
        if matches!(self.block, BlockState::Table) && grammar::table_separator(line) {
            self.pop_to_name("thead");
            self.push_mark("tbody", false, None);
            self.block = BlockState::TableBody;
            return true;
        }
        if line.starts_with('|') {
            self.push_mark("tr", false, None);
            self.pending = false;
            self.cell_open = false;
            self.cell_space.clear();
            self.replay(line);
            self.process_char('\n');
            return true;
        }
        false
    }

    fn cell_name(&self) -> &'static str {
        if matches!(self.block, BlockState::Table) {
            "th"
        } else {
            "td"
        }
    }

    fn close_cell(&mut self) {
        self.cell_space.clear();
        let cell = self.cell_name();
        self.line_end_hard();
        self.pop_to_name(cell);
        self.cell_open = false;
    }

    pub(crate) fn close_table(&mut self) {
        self.line_end_hard();
        self.pop_to_name("table");
        self.cell_open = false;
        self.cell_space.clear();
    }
}
