// Links and images: `[label](url "title")`, `![alt](url)`
//
// Label and url are collected wholesale; nothing is emitted until `)`
// confirms the construct. A `]` without a following `(` flushes the
// buffered label as literal text, as does a line end at any point of the
// collection.

use crate::event::{Attributes, Event};
use crate::parser::Parser;

pub(crate) enum LinkState {
    None,
    /// Collecting the label after `[` or `![`.
    Label { text: String, image: bool },
    /// Saw the closing `]`, waiting for `(` to confirm.
    AfterLabel { text: String, image: bool },
    Url {
        text: String,
        url: String,
        image: bool,
    },
    Title {
        text: String,
        url: String,
        title: String,
        image: bool,
        in_quotes: bool,
        seen_quotes: bool,
    },
}

impl Parser {
    pub(crate) fn link_char(&mut self, c: char) {
        match std::mem::replace(&mut self.inline.link, LinkState::None) {
            LinkState::None => self.plain_char(c),
            LinkState::Label { mut text, image } => match c {
                '\\' => {
                    self.inline.escaped = true;
                    self.inline.link = LinkState::Label { text, image };
                }
                ']' => self.inline.link = LinkState::AfterLabel { text, image },
                _ => {
                    text.push(c);
                    self.inline.link = LinkState::Label { text, image };
                }
            },
            LinkState::AfterLabel { text, image } => {
                if c == '(' {
                    self.inline.link = LinkState::Url {
                        text,
                        url: String::new(),
                        image,
                    };
                } else {
                    self.emit_link_literal(&text, image, "]");
                    self.inline_char(c);
                }
            }
            LinkState::Url {
                text,
                mut url,
                image,
            } => match c {
                '\\' => {
                    self.inline.escaped = true;
                    self.inline.link = LinkState::Url { text, url, image };
                }
                ')' => self.finish_link(text, url, None, image),
                ' ' => {
                    self.inline.link = LinkState::Title {
                        text,
                        url,
                        title: String::new(),
                        image,
                        in_quotes: false,
                        seen_quotes: false,
                    }
                }
                _ => {
                    url.push(c);
                    self.inline.link = LinkState::Url { text, url, image };
                }
            },
            LinkState::Title {
                text,
                url,
                mut title,
                image,
                mut in_quotes,
                mut seen_quotes,
            } => match c {
                '\\' => {
                    self.inline.escaped = true;
                    self.inline.link = LinkState::Title {
                        text,
                        url,
                        title,
                        image,
                        in_quotes,
                        seen_quotes,
                    };
                }
                '"' => {
                    in_quotes = !in_quotes;
                    seen_quotes = true;
                    self.inline.link = LinkState::Title {
                        text,
                        url,
                        title,
                        image,
                        in_quotes,
                        seen_quotes,
                    };
                }
                ')' if !in_quotes => {
                    let title = if seen_quotes || !title.is_empty() {
                        Some(title)
                    } else {
                        None
                    };
                    self.finish_link(text, url, title, image);
                }
                ' ' if !in_quotes => {
                    self.inline.link = LinkState::Title {
                        text,
                        url,
                        title,
                        image,
                        in_quotes,
                        seen_quotes,
                    };
                }
                _ => {
                    title.push(c);
                    self.inline.link = LinkState::Title {
                        text,
                        url,
                        title,
                        image,
                        in_quotes,
                        seen_quotes,
                    };
                }
            },
        }
    }

    fn finish_link(&mut self, text: String, url: String, title: Option<String>, image: bool) {
        if image {
            let mut attrs = Attributes::new();
            attrs.insert("src", url);
            attrs.insert("alt", text);
            if let Some(title) = title {
                attrs.insert("title", title);
            }
            self.emit(Event::mark_with("img", attrs));
            self.emit(Event::unmark("img"));
        } else {
            let mut attrs = Attributes::new();
            attrs.insert("href", url);
            if let Some(title) = title {
                attrs.insert("title", title);
            }
            self.emit(Event::mark_with("a", attrs));
            self.emit_text(text);
            self.emit(Event::unmark("a"));
        }
    }

    fn emit_link_literal(&mut self, text: &str, image: bool, suffix: &str) {
        let mut literal = String::from(if image { "![" } else { "[" });
        literal.push_str(text);
        literal.push_str(suffix);
        self.emit_text(literal);
    }

    /// Abandon an in-flight collection, flushing what the source held.
    pub(crate) fn flush_link_literal(&mut self) {
        match std::mem::replace(&mut self.inline.link, LinkState::None) {
            LinkState::None => {}
            LinkState::Label { text, image } => self.emit_link_literal(&text, image, ""),
            LinkState::AfterLabel { text, image } => self.emit_link_literal(&text, image, "]"),
            LinkState::Url { text, url, image } => {
                let suffix = format!("]({url}");
                self.emit_link_literal(&text, image, &suffix);
            }
            LinkState::Title {
                text,
                url,
                title,
                image,
                in_quotes,
                seen_quotes,
            } => {
                let mut suffix = format!("]({url} ");
                if seen_quotes {
                    suffix.push('"');
                    suffix.push_str(&title);
                    if !in_quotes {
                        suffix.push('"');
                    }
                } else {
                    suffix.push_str(&title);
                }
                self.emit_link_literal(&text, image, &suffix);
            }
        }
    }
}
