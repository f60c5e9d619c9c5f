// Double-backtick code spans: buffered until the matching delimiter
//
// Content is collected verbatim, including lone backticks. One leading
// and one trailing space are stripped iff both are present. The span may
// run across joined paragraph lines; an unterminated span flushes
// literally at block end.

use crate::event::Event;
use crate::parser::Parser;

pub(crate) struct CodeSpan {
    pub(crate) content: String,
    pub(crate) closing_ticks: u8,
}

impl CodeSpan {
    pub(crate) fn new() -> Self {
        Self {
            content: String::new(),
            closing_ticks: 0,
        }
    }
}

impl Parser {
    pub(crate) fn code_span_char(&mut self, c: char) {
        let finished = {
            let Some(span) = self.inline.span.as_mut() else {
                return;
            };
            if c == '`' {
                span.closing_ticks += 1;
                span.closing_ticks == 2
            } else {
                if span.closing_ticks == 1 {
                    span.content.push('`');
                    span.closing_ticks = 0;
                }
                span.content.push(c);
                false
            }
        };
        if finished {
            self.finish_code_span();
        }
    }

    fn finish_code_span(&mut self) {
        let Some(span) = self.inline.span.take() else {
            return;
        };
        let mut content = span.content;
        if content.len() >= 2 && content.starts_with(' ') && content.ends_with(' ') {
            content = content[1..content.len() - 1].to_string();
        }
        self.emit(Event::mark("code"));
        self.emit_text(content);
        self.emit(Event::unmark("code"));
    }

    pub(crate) fn flush_code_span_literal(&mut self) {
        let Some(span) = self.inline.span.take() else {
            return;
        };
        let mut literal = String::from("``");
        literal.push_str(&span.content);
        for _ in 0..span.closing_ticks {
            literal.push('`');
        }
        self.emit_text(literal);
    }
}
