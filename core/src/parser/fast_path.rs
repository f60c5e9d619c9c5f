// Fast path: bulk emission of text runs that cannot alter parser state
//
// Character-by-character dispatch is the correctness baseline; this scan
// peels the longest prefix of the current chunk in which no character is
// a control for the active context and emits it as a single Text event.
// It must be a pure optimization: enabling or disabling it never changes
// the event sequence.

use super::block::BlockState;
use super::inline::LinkState;
use super::Parser;

fn is_flow_control(c: char) -> bool {
    matches!(
        c,
        '\\' | '`' | '*' | '_' | '~' | '^' | '=' | '$' | '[' | '!' | '<' | '\n'
    )
}

fn is_code_control(c: char) -> bool {
    c == '`' || c == '\n'
}

fn is_math_control(c: char) -> bool {
    c == '$' || c == '\n'
}

fn is_markup_control(c: char) -> bool {
    c == '<' || c == '\n'
}

impl Parser {
    /// Length of the next state-neutral slice of `rest`, if any.
    pub(crate) fn fast_path_len(&self, rest: &str) -> Option<usize> {
        if self.pending || self.inline.escaped {
            return None;
        }
        if !self.inline.buffer.is_empty() || self.inline.span.is_some() {
            return None;
        }
        if !matches!(self.inline.link, LinkState::None) {
            return None;
        }
        let control: fn(char) -> bool = match self.block {
            BlockState::CustomMarkup(_) => {
                if self.skip_tag_newline || self.hold_newline || !self.close_probe.is_empty() {
                    return None;
                }
                is_markup_control
            }
            BlockState::Paragraph
            | BlockState::Heading(_)
            | BlockState::UnorderedList
            | BlockState::OrderedList
            | BlockState::Blockquote
            | BlockState::BlockquoteList => {
                if self.inline.code {
                    is_code_control
                } else if self.inline.math {
                    is_math_control
                } else {
                    is_flow_control
                }
            }
            _ => return None,
        };
        match rest.find(control) {
            Some(0) => None,
            Some(idx) => Some(idx),
            None => Some(rest.len()),
        }
    }
}
