// Streaming Markdown + markup parser: chunked character-driven state
// machine producing semantic events with minimum latency.
//
// Two nested state machines do the work. The block machine decides what
// the current line is (heading, paragraph, fence, list, quote, table,
// custom markup) and owns a small line buffer that only fills while that
// decision is still open. The inline machine tracks formatting toggles
// and the handful of marker buffers inside text-bearing blocks. Chunk
// boundaries never influence the event sequence.

pub(crate) mod block;
mod fast_path;
pub(crate) mod inline;

use std::collections::VecDeque;

use crate::event::{Attributes, Event};
use block::BlockState;
use inline::InlineState;

/// One open scope on the parser's LIFO stack. Everything still open at a
/// block boundary or end of input is closed in reverse order.
pub(crate) struct Open {
    pub(crate) name: String,
    pub(crate) is_tag: bool,
}

/// Reusable streaming parser state.
///
/// Feed arbitrary string chunks with [`Parser::feed`] and flush the tail
/// with [`Parser::finalize`]; or use [`parse`] for a lazy pull-based
/// iterator over a chunk sequence. Splitting the input differently never
/// changes the produced events, and no input ever fails: malformed
/// constructs degrade to literal text with open scopes auto-closed.
pub struct Parser {
    pub(crate) block: BlockState,
    pub(crate) inline: InlineState,
    pub(crate) stack: Vec<Open>,
    /// Buffered line prefix while a block-level decision is pending.
    pub(crate) line: String,
    pub(crate) pending: bool,
    /// Pending phase is past a committed `> ` prefix.
    pub(crate) quote_inner: bool,
    /// Closing-fence candidate at the start of a code or math line.
    pub(crate) probe: String,
    pub(crate) at_line_start: bool,
    /// Consume a single newline right after a custom markup opening tag.
    pub(crate) skip_tag_newline: bool,
    /// Newline held back because it may precede the closing tag.
    pub(crate) hold_newline: bool,
    /// Partial `</tag>` candidate inside a custom markup body.
    pub(crate) close_probe: String,
    pub(crate) cell_open: bool,
    /// Held-back spaces inside a table cell, dropped when trailing.
    pub(crate) cell_space: String,
    out: VecDeque<Event>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            block: BlockState::Start,
            inline: InlineState::new(),
            stack: Vec::new(),
            line: String::new(),
            pending: true,
            quote_inner: false,
            probe: String::new(),
            at_line_start: false,
            skip_tag_newline: false,
            hold_newline: false,
            close_probe: String::new(),
            cell_open: false,
            cell_space: String::new(),
            out: VecDeque::new(),
        }
    }

    /// Consume one chunk and return every event it disambiguates.
    pub fn feed(&mut self, chunk: &str) -> Vec<Event> {
        log::trace!("feeding {} byte chunk", chunk.len());
        let mut rest = chunk;
        while !rest.is_empty() {
            if let Some(len) = self.fast_path_len(rest) {
                self.emit_text(&rest[..len]);
                rest = &rest[len..];
                continue;
            }
            if let Some(c) = rest.chars().next() {
                self.process_char(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        self.drain()
    }

    /// Signal end of input: settle any pending line, flush residual
    /// buffers and close every open scope in reverse order. The parser is
    /// reusable afterwards.
    pub fn finalize(&mut self) -> Vec<Event> {
        log::debug!("finalize: {} open marks", self.stack.len());
        self.settle_at_eof();
        self.close_all();
        self.enter_start();
        self.drain()
    }

    fn drain(&mut self) -> Vec<Event> {
        self.out.drain(..).collect()
    }

    // ------------------------------------------------------------------
    // Character dispatch
    // ------------------------------------------------------------------

    pub(crate) fn process_char(&mut self, c: char) {
        if self.pending {
            match self.block {
                BlockState::Start => self.start_char(c),
                BlockState::Paragraph => self.paragraph_pending_char(c),
                BlockState::UnorderedList | BlockState::OrderedList => self.list_pending_char(c),
                BlockState::Blockquote | BlockState::BlockquoteList => self.quote_pending_char(c),
                BlockState::Table | BlockState::TableBody => self.table_pending_char(c),
                _ => {
                    self.pending = false;
                    self.process_char(c);
                }
            }
            return;
        }
        match self.block {
            BlockState::Start => {
                self.pending = true;
                self.start_char(c);
            }
            BlockState::Heading(_)
            | BlockState::Paragraph
            | BlockState::UnorderedList
            | BlockState::OrderedList
            | BlockState::Blockquote
            | BlockState::BlockquoteList => self.flow_char(c),
            BlockState::CodeBlock(_) => self.code_block_char(c),
            BlockState::MathBlock => self.math_block_char(c),
            BlockState::Table | BlockState::TableBody => self.table_char(c),
            BlockState::CustomMarkup(_) => self.markup_char(c),
        }
    }

    fn flow_char(&mut self, c: char) {
        if c == '\n' && !self.inline.escaped {
            self.line_end();
            return;
        }
        self.inline_char(c);
    }

    /// Feed buffered characters back through normal dispatch.
    pub(crate) fn replay(&mut self, text: &str) {
        for c in text.chars() {
            self.process_char(c);
        }
    }

    /// Hand a rejected continuation line back to block dispatch.
    pub(crate) fn redispatch(&mut self, line: &str, with_newline: bool) {
        self.replay(line);
        if with_newline {
            self.process_char('\n');
        }
    }

    // ------------------------------------------------------------------
    // Event emission and the open-mark stack
    // ------------------------------------------------------------------

    pub(crate) fn emit(&mut self, event: Event) {
        self.out.push_back(event);
    }

    pub(crate) fn emit_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.emit(Event::Text { text });
        }
    }

    pub(crate) fn emit_char(&mut self, c: char) {
        self.emit(Event::Text { text: c.to_string() });
    }

    pub(crate) fn push_mark(&mut self, name: &str, is_tag: bool, attributes: Option<Attributes>) {
        self.stack.push(Open {
            name: name.to_string(),
            is_tag,
        });
        self.emit(Event::Mark {
            name: name.to_string(),
            is_tag,
            attributes,
        });
    }

    /// Close the innermost open mark with this name, together with
    /// everything opened after it (LIFO). Clears inline toggles as their
    /// marks close. A name with no open mark is a no-op.
    pub(crate) fn pop_to_name(&mut self, name: &str) {
        let Some(pos) = self.stack.iter().rposition(|open| open.name == name) else {
            log::warn!("close requested for {name:?} with no matching open mark");
            return;
        };
        self.pop_down_to(pos);
    }

    /// Close everything opened after the innermost mark with this name,
    /// leaving the mark itself open.
    pub(crate) fn pop_above_name(&mut self, name: &str) {
        let Some(pos) = self.stack.iter().rposition(|open| open.name == name) else {
            return;
        };
        self.pop_down_to(pos + 1);
    }

    fn pop_down_to(&mut self, len: usize) {
        while self.stack.len() > len {
            if let Some(open) = self.stack.pop() {
                self.set_inline_flag(&open.name, false);
                self.emit(Event::Unmark {
                    name: open.name,
                    is_tag: open.is_tag,
                });
            }
        }
    }

    /// Whether `name` is open inside the current blockquote.
    pub(crate) fn quote_has(&self, name: &str) -> bool {
        for open in self.stack.iter().rev() {
            if open.name == "blockquote" {
                return false;
            }
            if open.name == name {
                return true;
            }
        }
        false
    }

    pub(crate) fn stack_depth_of(&self, name: &str) -> usize {
        self.stack
            .iter()
            .rposition(|open| open.name == name)
            .unwrap_or(0)
    }

    pub(crate) fn close_all(&mut self) {
        self.line_end_hard();
        self.pop_down_to(0);
        self.inline.reset();
    }

    pub(crate) fn enter_start(&mut self) {
        self.block = BlockState::Start;
        self.pending = true;
        self.quote_inner = false;
        self.line.clear();
        self.at_line_start = false;
        self.probe.clear();
        self.close_probe.clear();
        self.hold_newline = false;
        self.skip_tag_newline = false;
        self.cell_open = false;
        self.cell_space.clear();
    }
}

// ----------------------------------------------------------------------
// Lazy stream surface
// ----------------------------------------------------------------------

/// Parse a lazy sequence of chunks into a lazy sequence of events.
///
/// Pulling one event consumes as few chunks as disambiguation requires;
/// dropping the iterator abandons any still-open scopes without emitting
/// events for them.
pub fn parse<I>(chunks: I) -> Events<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Events {
        parser: Parser::new(),
        chunks: chunks.into_iter(),
        buffered: VecDeque::new(),
        finalized: false,
    }
}

/// Parse a complete in-memory document as a single chunk.
pub fn parse_str(input: &str) -> Events<std::iter::Once<&str>> {
    parse(std::iter::once(input))
}

/// Lazy event stream over a chunk producer. See [`parse`].
pub struct Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    parser: Parser,
    chunks: I,
    buffered: VecDeque<Event>,
    finalized: bool,
}

impl<I> Iterator for Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.buffered.pop_front() {
                return Some(event);
            }
            if self.finalized {
                return None;
            }
            match self.chunks.next() {
                Some(chunk) => self.buffered.extend(self.parser.feed(chunk.as_ref())),
                None => {
                    self.finalized = true;
                    self.buffered.extend(self.parser.finalize());
                }
            }
        }
    }
}
