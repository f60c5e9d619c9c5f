// Block machine: line classification and the Start-state dispatcher
//
// A line is classified from its growing prefix. Most constructs commit
// early ("# " is already a heading) and let the rest of the line stream
// through the inline machine; fences, thematic breaks and math fences
// need the complete line and therefore only classify once the newline
// arrives.

pub(crate) mod blockquote;
pub(crate) mod code_block;
pub(crate) mod custom_markup;
pub(crate) mod list;
pub(crate) mod math_block;
pub(crate) mod paragraph;
pub(crate) mod table;

use crate::event::{Attributes, Event};
use crate::grammar;
use crate::parser::Parser;

/// Outer parser mode. `Start` is the only mode that has not yet decided
/// what the current line is.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BlockState {
    Start,
    Heading(u8),
    Paragraph,
    CodeBlock(usize),
    UnorderedList,
    OrderedList,
    Blockquote,
    BlockquoteList,
    MathBlock,
    Table,
    TableBody,
    CustomMarkup(String),
}

/// Decision for a (possibly still growing) line prefix.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Classify {
    /// Still ambiguous; keep buffering.
    NeedMore,
    Paragraph,
    Heading(u8),
    Bullet,
    Checkbox { checked: bool },
    Ordered { consumed: usize },
    Quote,
    Table,
    Fence { lang: String },
    ThematicBreak,
    MathFence,
    Markup {
        name: String,
        attributes: Option<Attributes>,
        consumed: usize,
    },
}

fn need_or_para(complete: bool) -> Classify {
    if complete {
        Classify::Paragraph
    } else {
        Classify::NeedMore
    }
}

/// Classify a line prefix. `complete` means a newline (or end of input)
/// terminated the line, so nothing more will arrive for it.
pub(crate) fn classify(line: &str, complete: bool) -> Classify {
    let Some(first) = line.chars().next() else {
        return need_or_para(complete);
    };
    match first {
        '#' => classify_hashes(line, complete),
        '-' => classify_dash(line, complete),
        '>' => classify_quote(line, complete),
        '`' => classify_backticks(line, complete),
        '$' => classify_dollars(line, complete),
        '|' => Classify::Table,
        '<' => classify_tag(line, complete),
        c if c.is_ascii_digit() => classify_ordered(line, complete),
        _ => Classify::Paragraph,
    }
}

fn classify_hashes(line: &str, complete: bool) -> Classify {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    let rest = &line[hashes..];
    if rest.is_empty() {
        return need_or_para(complete);
    }
    if hashes <= 6 && rest.starts_with(' ') {
        Classify::Heading(hashes as u8)
    } else {
        Classify::Paragraph
    }
}

fn classify_dash(line: &str, complete: bool) -> Classify {
    if line.bytes().all(|b| b == b'-') {
        if !complete {
            return Classify::NeedMore;
        }
        return if grammar::thematic_break(line) {
            Classify::ThematicBreak
        } else {
            Classify::Paragraph
        };
    }
    if let Some(rest) = line.strip_prefix("- ") {
        if rest.starts_with("[ ] ") {
            return Classify::Checkbox { checked: false };
        }
        if rest.starts_with("[x] ") {
            return Classify::Checkbox { checked: true };
        }
        if !complete && ("[ ] ".starts_with(rest) || "[x] ".starts_with(rest)) {
            return Classify::NeedMore;
        }
        return Classify::Bullet;
    }
    Classify::Paragraph
}

fn classify_quote(line: &str, complete: bool) -> Classify {
    if line == ">" {
        return need_or_para(complete);
    }
    if line.starts_with("> ") {
        Classify::Quote
    } else {
        Classify::Paragraph
    }
}

fn classify_backticks(line: &str, complete: bool) -> Classify {
    if !complete {
        if line.len() < 3 {
            return if "```".starts_with(line) {
                Classify::NeedMore
            } else {
                Classify::Paragraph
            };
        }
        let plausible = line.starts_with("```")
            && line[3..].chars().all(|c| c.is_ascii_alphanumeric());
        return if plausible {
            Classify::NeedMore
        } else {
            Classify::Paragraph
        };
    }
    match grammar::fence_open(line) {
        Some(lang) => Classify::Fence {
            lang: lang.to_string(),
        },
        None => Classify::Paragraph,
    }
}

fn classify_dollars(line: &str, complete: bool) -> Classify {
    if !complete {
        return if line == "$" || line == "$$" {
            Classify::NeedMore
        } else {
            Classify::Paragraph
        };
    }
    if grammar::math_fence(line) {
        Classify::MathFence
    } else {
        Classify::Paragraph
    }
}

fn classify_ordered(line: &str, complete: bool) -> Classify {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    let rest = &line[digits..];
    if rest.is_empty() || rest == "." {
        return need_or_para(complete);
    }
    match grammar::ordered_marker(line) {
        Some(consumed) => Classify::Ordered { consumed },
        None => Classify::Paragraph,
    }
}

fn classify_tag(line: &str, complete: bool) -> Classify {
    let bytes = line.as_bytes();
    if bytes.len() >= 2 && !bytes[1].is_ascii_alphabetic() {
        return Classify::Paragraph;
    }
    // Only attempt a parse once an unquoted `>` terminates the candidate.
    if line.ends_with('>') && line.bytes().filter(|b| *b == b'"').count() % 2 == 0 {
        return match grammar::open_tag(line) {
            Ok(("", (name, attributes))) => Classify::Markup {
                name,
                attributes,
                consumed: line.len(),
            },
            _ => Classify::Paragraph,
        };
    }
    if complete {
        Classify::Paragraph
    } else {
        Classify::NeedMore
    }
}

pub(crate) fn heading_name(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

impl Parser {
    /// Character dispatch while no block has been committed for the
    /// current line.
    pub(crate) fn start_char(&mut self, c: char) {
        if c == '\n' {
            if self.line.is_empty() {
                return;
            }
            let line = std::mem::take(&mut self.line);
            let cls = classify(&line, true);
            let line_consumed = matches!(
                cls,
                Classify::Fence { .. } | Classify::MathFence | Classify::ThematicBreak
            );
            self.commit_start(cls, &line);
            if !line_consumed {
                self.process_char('\n');
            }
            return;
        }
        self.line.push(c);
        let cls = classify(&self.line, false);
        if matches!(cls, Classify::NeedMore) {
            return;
        }
        let line = std::mem::take(&mut self.line);
        self.commit_start(cls, &line);
    }

    /// Open the block a classification decided on and stream the already
    /// buffered remainder of the line into it.
    pub(crate) fn commit_start(&mut self, cls: Classify, line: &str) {
        log::trace!("block committed: {cls:?}");
        self.pending = false;
        match cls {
            Classify::NeedMore => {
                // caller never commits an undecided line; keep buffering
                self.line.push_str(line);
                self.pending = true;
            }
            Classify::Paragraph => {
                self.push_mark("p", false, None);
                self.block = BlockState::Paragraph;
                self.replay(line);
            }
            Classify::Heading(level) => {
                self.push_mark(heading_name(level), false, None);
                self.block = BlockState::Heading(level);
                self.replay(&line[level as usize + 1..]);
            }
            Classify::Bullet => {
                self.push_mark("ul", false, None);
                self.push_mark("li", false, None);
                self.block = BlockState::UnorderedList;
                self.replay(&line[2..]);
            }
            Classify::Checkbox { checked } => {
                self.push_mark("ul", false, None);
                self.open_checkbox_item(checked);
                self.block = BlockState::UnorderedList;
                self.replay(&line[6..]);
            }
            Classify::Ordered { consumed } => {
                self.push_mark("ol", false, None);
                self.push_mark("li", false, None);
                self.block = BlockState::OrderedList;
                self.replay(&line[consumed..]);
            }
            Classify::Quote => {
                self.push_mark("blockquote", false, None);
                self.block = BlockState::Blockquote;
                self.pending = true;
                self.quote_inner = true;
                self.replay(&line[2..]);
            }
            Classify::Table => {
                self.push_mark("table", false, None);
                self.push_mark("thead", false, None);
                self.push_mark("tr", false, None);
                self.block = BlockState::Table;
                self.cell_open = false;
                self.cell_space.clear();
                self.replay(&line[1..]);
            }
            Classify::Fence { lang } => self.open_code_block(&lang),
            Classify::MathFence => self.open_math_block(),
            Classify::ThematicBreak => {
                self.emit_hr();
                self.enter_start();
            }
            Classify::Markup {
                name,
                attributes,
                consumed,
            } => {
                self.push_mark(&name, true, attributes);
                self.block = BlockState::CustomMarkup(name);
                self.skip_tag_newline = true;
                self.replay(&line[consumed..]);
            }
        }
    }

    fn emit_hr(&mut self) {
        self.emit(Event::mark("hr"));
        self.emit(Event::unmark("hr"));
    }

    /// End of the current line inside a committed text-bearing block.
    pub(crate) fn line_end(&mut self) {
        match self.block {
            BlockState::Heading(level) => {
                self.line_end_hard();
                self.pop_to_name(heading_name(level));
                self.enter_start();
            }
            BlockState::Paragraph => {
                self.line_end_soft();
                self.pending = true;
                self.line.clear();
            }
            BlockState::UnorderedList | BlockState::OrderedList => {
                self.line_end_hard();
                self.pop_to_name("li");
                self.pending = true;
                self.line.clear();
            }
            BlockState::Blockquote => {
                self.line_end_soft();
                self.pending = true;
                self.quote_inner = false;
                self.line.clear();
            }
            BlockState::BlockquoteList => {
                self.line_end_hard();
                self.pop_to_name("li");
                self.pending = true;
                self.quote_inner = false;
                self.line.clear();
            }
            _ => {}
        }
    }

    /// Drive a pending line to a decision at end of input. A rejected
    /// continuation line re-enters Start, which may leave a new pending
    /// line, so this steps until the state settles.
    pub(crate) fn settle_at_eof(&mut self) {
        for _ in 0..6 {
            if !self.pending || self.line.is_empty() {
                break;
            }
            let line = std::mem::take(&mut self.line);
            match self.block {
                BlockState::Start => {
                    let cls = classify(&line, true);
                    self.commit_start(cls, &line);
                }
                BlockState::Paragraph => match classify(&line, true) {
                    Classify::Paragraph => self.continue_paragraph(&line),
                    _ => {
                        self.finish_paragraph();
                        self.enter_start();
                        self.redispatch(&line, false);
                    }
                },
                BlockState::UnorderedList | BlockState::OrderedList => {
                    if !self.list_try_continue(&line) {
                        self.close_list();
                        self.enter_start();
                        self.redispatch(&line, false);
                    }
                }
                BlockState::Blockquote | BlockState::BlockquoteList => {
                    if self.quote_inner {
                        self.quote_inner_commit(&line);
                    } else {
                        self.close_quote();
                        self.enter_start();
                        self.redispatch(&line, false);
                    }
                }
                BlockState::Table | BlockState::TableBody => {
                    if !self.table_try_continue(&line) {
                        self.close_table();
                        self.enter_start();
                        self.redispatch(&line, false);
                    }
                }
                _ => break,
            }
        }
        // residue local to fenced and markup blocks; a complete closing
        // fence right at the end of input still closes its block
        match self.block {
            BlockState::CodeBlock(fence_len) => {
                if self.probe.len() >= fence_len {
                    self.probe.clear();
                    self.pop_to_name("pre");
                    self.enter_start();
                } else {
                    let probe = std::mem::take(&mut self.probe);
                    self.emit_text(probe);
                }
            }
            BlockState::MathBlock => {
                if self.probe == "$$" {
                    self.probe.clear();
                    self.pop_to_name("math");
                    self.enter_start();
                } else {
                    let probe = std::mem::take(&mut self.probe);
                    self.emit_text(probe);
                }
            }
            BlockState::CustomMarkup(_) => {
                if self.hold_newline {
                    self.hold_newline = false;
                    self.emit_text("\n");
                }
                let probe = std::mem::take(&mut self.close_probe);
                self.emit_text(probe);
            }
            _ => {}
        }
    }
}
