// Inline machine: formatting toggles and marker buffers
//
// Active inside text-bearing blocks. Most characters emit directly; the
// marker characters either toggle a scope immediately (`^`, `$`) or sit
// in a small buffer until the next character resolves them (`*` runs,
// `~`, `=`, `!`, a lone backtick, an autolink probe). Link and image
// collection buffer label and url wholesale. At a line end the buffers
// resolve exactly as if a non-marker character had arrived; at a block
// end everything still open is flushed or auto-closed.

pub(crate) mod autolink;
pub(crate) mod code_span;
pub(crate) mod emphasis;
pub(crate) mod link;

use crate::parser::Parser;
pub(crate) use code_span::CodeSpan;
pub(crate) use link::LinkState;

pub(crate) struct InlineState {
    pub(crate) italic: bool,
    pub(crate) bold: bool,
    pub(crate) code: bool,
    pub(crate) strike: bool,
    pub(crate) sub: bool,
    pub(crate) sup: bool,
    pub(crate) highlight: bool,
    pub(crate) math: bool,
    pub(crate) escaped: bool,
    /// Homogeneous marker run, or an autolink probe starting with `<`.
    pub(crate) buffer: String,
    /// Double-backtick span collection.
    pub(crate) span: Option<CodeSpan>,
    pub(crate) link: LinkState,
}

impl InlineState {
    pub(crate) fn new() -> Self {
        Self {
            italic: false,
            bold: false,
            code: false,
            strike: false,
            sub: false,
            sup: false,
            highlight: false,
            math: false,
            escaped: false,
            buffer: String::new(),
            span: None,
            link: LinkState::None,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Parser {
    pub(crate) fn inline_char(&mut self, c: char) {
        if self.inline.escaped {
            self.inline.escaped = false;
            self.escaped_char(c);
            return;
        }
        if self.inline.span.is_some() {
            self.code_span_char(c);
            return;
        }
        if self.inline.code {
            if c == '`' {
                self.toggle_inline("code");
            } else {
                self.emit_char(c);
            }
            return;
        }
        if self.inline.math {
            if c == '$' {
                self.toggle_inline("math");
            } else {
                self.emit_char(c);
            }
            return;
        }
        if !matches!(self.inline.link, LinkState::None) {
            self.link_char(c);
            return;
        }
        if !self.inline.buffer.is_empty() {
            self.buffered_char(c);
            return;
        }
        self.plain_char(c);
    }

    pub(crate) fn plain_char(&mut self, c: char) {
        match c {
            '\\' => self.inline.escaped = true,
            '*' | '_' | '~' | '=' | '`' | '!' | '<' => self.inline.buffer.push(c),
            '^' => self.toggle_inline("sup"),
            '$' => self.toggle_inline("math"),
            '[' => {
                self.inline.link = LinkState::Label {
                    text: String::new(),
                    image: false,
                }
            }
            _ => self.emit_char(c),
        }
    }

    /// A character whose marker meaning was suppressed by `\`.
    fn escaped_char(&mut self, c: char) {
        if matches!(self.inline.link, LinkState::AfterLabel { .. }) {
            self.flush_link_literal();
            self.emit_char(c);
            return;
        }
        match &mut self.inline.link {
            LinkState::Label { text, .. } => text.push(c),
            LinkState::Url { url, .. } => url.push(c),
            LinkState::Title { title, .. } => title.push(c),
            _ => self.emit_char(c),
        }
    }

    /// Toggle an inline scope by name. Closing a scope that is not the
    /// topmost open mark first closes everything above it, keeping the
    /// stream balanced.
    pub(crate) fn toggle_inline(&mut self, name: &str) {
        if self.inline_flag(name) {
            self.pop_to_name(name);
        } else {
            self.set_inline_flag(name, true);
            self.push_mark(name, false, None);
        }
    }

    fn inline_flag(&self, name: &str) -> bool {
        match name {
            "em" => self.inline.italic,
            "strong" => self.inline.bold,
            "code" => self.inline.code,
            "del" => self.inline.strike,
            "sub" => self.inline.sub,
            "sup" => self.inline.sup,
            "mark" => self.inline.highlight,
            "math" => self.inline.math,
            _ => false,
        }
    }

    pub(crate) fn set_inline_flag(&mut self, name: &str, value: bool) {
        match name {
            "em" => self.inline.italic = value,
            "strong" => self.inline.bold = value,
            "code" => self.inline.code = value,
            "del" => self.inline.strike = value,
            "sub" => self.inline.sub = value,
            "sup" => self.inline.sup = value,
            "mark" => self.inline.highlight = value,
            "math" => self.inline.math = value,
            _ => {}
        }
    }

    /// The literal newline joining two lines of the same paragraph. Goes
    /// into an open double-backtick span instead of the output stream.
    pub(crate) fn inline_newline_join(&mut self) {
        if let Some(span) = self.inline.span.as_mut() {
            if span.closing_ticks == 1 {
                span.content.push('`');
                span.closing_ticks = 0;
            }
            span.content.push('\n');
        } else {
            self.emit_text("\n");
        }
    }

    /// Resolve marker buffers at a line boundary. Spans and the code
    /// toggle survive into a possible continuation line.
    pub(crate) fn line_end_soft(&mut self) {
        self.resolve_marker_buffer();
        self.flush_link_literal();
    }

    /// Resolve and flush everything; used when the line boundary is also
    /// a block or cell boundary.
    pub(crate) fn line_end_hard(&mut self) {
        self.line_end_soft();
        self.flush_code_span_literal();
        self.inline.escaped = false;
    }
}
