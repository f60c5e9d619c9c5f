// Stream transformer: ordered, mode-scoped rewrite rules
//
// Rules are tried in registration order against each incoming Mark; the
// first whose mode gate and name/predicate both pass runs its handler.
// The handler's output before `children()` replaces the opening mark
// immediately; output after `children()` is held and flushed when the
// matching Unmark arrives. Unmatched marks pass through but still track
// the mode stack. Lazy: one output event is produced from as little
// input as possible.

pub mod scope;

use std::collections::VecDeque;

use crate::event::Event;

pub use scope::Scope;
use scope::Op;

type MarkHandler = Box<dyn Fn(&mut Scope, &Event)>;
type TextHandler = Box<dyn Fn(&mut Scope, &str)>;
type Predicate = Box<dyn Fn(&Event) -> bool>;

enum Matcher {
    Name(String),
    Predicate(Predicate),
}

struct Rule {
    matcher: Matcher,
    mode: Option<String>,
    handler: MarkHandler,
}

impl Rule {
    fn applies(&self, event: &Event, mode: Option<&str>) -> bool {
        if let Some(required) = self.mode.as_deref() {
            if Some(required) != mode {
                return false;
            }
        }
        match &self.matcher {
            Matcher::Name(name) => event.name() == Some(name.as_str()),
            Matcher::Predicate(predicate) => predicate(event),
        }
    }
}

/// A compiled set of rewrite rules. Build one with [`build_transformer`]
/// and apply it with [`transform`]; a transformer holds no per-stream
/// state and can be reused.
pub struct Transformer {
    rules: Vec<Rule>,
    text_rule: Option<TextHandler>,
}

/// Registration surface handed to the [`build_transformer`] closure.
pub struct TransformerBuilder {
    rules: Vec<Rule>,
    text_rule: Option<TextHandler>,
}

impl TransformerBuilder {
    /// Match `Mark` events by exact name, optionally gated to a child
    /// mode established by an outer rule's `children(mode)`.
    pub fn on_mark(
        &mut self,
        name: &str,
        mode: Option<&str>,
        handler: impl Fn(&mut Scope, &Event) + 'static,
    ) {
        self.rules.push(Rule {
            matcher: Matcher::Name(name.to_string()),
            mode: mode.map(str::to_string),
            handler: Box::new(handler),
        });
    }

    /// Match `Mark` events with an arbitrary predicate.
    pub fn on_match(
        &mut self,
        predicate: impl Fn(&Event) -> bool + 'static,
        mode: Option<&str>,
        handler: impl Fn(&mut Scope, &Event) + 'static,
    ) {
        self.rules.push(Rule {
            matcher: Matcher::Predicate(Box::new(predicate)),
            mode: mode.map(str::to_string),
            handler: Box::new(handler),
        });
    }

    /// Route every `Text` event through `handler`. At most one text rule
    /// is active; a later registration replaces the earlier one.
    pub fn on_text(&mut self, handler: impl Fn(&mut Scope, &str) + 'static) {
        self.text_rule = Some(Box::new(handler));
    }
}

/// Build a transformer from a registration program.
pub fn build_transformer(f: impl FnOnce(&mut TransformerBuilder)) -> Transformer {
    let mut builder = TransformerBuilder {
        rules: Vec::new(),
        text_rule: None,
    };
    f(&mut builder);
    Transformer {
        rules: builder.rules,
        text_rule: builder.text_rule,
    }
}

/// Apply a transformer to an event stream, lazily.
pub fn transform<'a, I>(events: I, transformer: &'a Transformer) -> Transformed<'a, I::IntoIter>
where
    I: IntoIterator<Item = Event>,
{
    Transformed {
        input: events.into_iter(),
        transformer,
        stack: Vec::new(),
        out: VecDeque::new(),
    }
}

struct Frame {
    matched: bool,
    mode: Option<String>,
    suffix: Vec<Event>,
}

/// Lazy transformed stream. See [`transform`].
pub struct Transformed<'a, I>
where
    I: Iterator<Item = Event>,
{
    input: I,
    transformer: &'a Transformer,
    stack: Vec<Frame>,
    out: VecDeque<Event>,
}

impl<'a, I> Iterator for Transformed<'a, I>
where
    I: Iterator<Item = Event>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.out.pop_front() {
                return Some(event);
            }
            let event = self.input.next()?;
            self.step(event);
        }
    }
}

impl<'a, I> Transformed<'a, I>
where
    I: Iterator<Item = Event>,
{
    fn current_mode(&self) -> Option<&str> {
        self.stack.last().and_then(|frame| frame.mode.as_deref())
    }

    fn step(&mut self, event: Event) {
        let transformer = self.transformer;
        match &event {
            Event::Text { text } => {
                if let Some(handler) = &transformer.text_rule {
                    let mut scope = Scope::new();
                    handler(&mut scope, text);
                    for op in scope.into_ops() {
                        if let Op::Emit(out) = op {
                            self.out.push_back(out);
                        }
                    }
                } else {
                    self.out.push_back(event);
                }
            }
            Event::Mark { .. } => {
                let mode = self.current_mode().map(str::to_string);
                let rule = transformer
                    .rules
                    .iter()
                    .find(|rule| rule.applies(&event, mode.as_deref()));
                match rule {
                    Some(rule) => {
                        let mut scope = Scope::new();
                        (rule.handler)(&mut scope, &event);
                        let mut suffix = Vec::new();
                        let mut child_mode = mode;
                        let mut after_children = false;
                        for op in scope.into_ops() {
                            match op {
                                Op::Children(m) if !after_children => {
                                    after_children = true;
                                    child_mode = m;
                                }
                                // later splice requests are inert
                                Op::Children(_) => {}
                                Op::Emit(out) => {
                                    if after_children {
                                        suffix.push(out);
                                    } else {
                                        self.out.push_back(out);
                                    }
                                }
                            }
                        }
                        self.stack.push(Frame {
                            matched: true,
                            mode: child_mode,
                            suffix,
                        });
                    }
                    None => {
                        self.stack.push(Frame {
                            matched: false,
                            mode,
                            suffix: Vec::new(),
                        });
                        self.out.push_back(event);
                    }
                }
            }
            Event::Unmark { .. } => match self.stack.pop() {
                // a close with no tracked open passes through untouched
                None => self.out.push_back(event),
                Some(frame) => {
                    if frame.matched {
                        self.out.extend(frame.suffix);
                    } else {
                        self.out.push_back(event);
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::build_events;

    #[test]
    fn smoke_test_identity_without_rules() {
        let transformer = build_transformer(|_| {});
        let events = build_events(|b| b.scope("p", |b| b.text("x")));
        let out: Vec<Event> = transform(events.clone(), &transformer).collect();
        assert_eq!(out, events);
    }

    #[test]
    fn smoke_test_prefix_and_suffix_around_children() {
        let transformer = build_transformer(|t| {
            t.on_mark("h1", None, |s, _| {
                s.text("# ");
                s.children(None);
                s.text("\n");
            });
        });
        let events = build_events(|b| b.scope("h1", |b| b.text("Title")));
        let out: Vec<Event> = transform(events, &transformer).collect();
        assert_eq!(
            out,
            vec![Event::text("# "), Event::text("Title"), Event::text("\n")]
        );
    }

    #[test]
    fn smoke_test_mode_gated_rule() {
        let transformer = build_transformer(|t| {
            t.on_mark("p", None, |s, _| s.children(Some("inline")));
            t.on_mark("em", Some("inline"), |s, _| {
                s.text("*");
                s.children(Some("inline"));
                s.text("*");
            });
        });
        // em at top level: the rule requires "inline" mode, so it passes
        // through untouched
        let top = build_events(|b| b.scope("em", |b| b.text("x")));
        let out: Vec<Event> = transform(top.clone(), &transformer).collect();
        assert_eq!(out, top);

        let nested = build_events(|b| {
            b.scope("p", |b| b.scope("em", |b| b.text("x")));
        });
        let out: Vec<Event> = transform(nested, &transformer).collect();
        assert_eq!(
            out,
            vec![Event::text("*"), Event::text("x"), Event::text("*")]
        );
    }

    #[test]
    fn smoke_test_predicate_rule_and_text_rule() {
        let transformer = build_transformer(|t| {
            t.on_match(|e| e.is_tag(), None, |s, e| {
                s.mark("section", |s| {
                    if let Some(name) = e.name() {
                        s.text(name.to_string());
                    }
                    s.children(None);
                });
            });
            t.on_text(|s, text| s.text(text.to_uppercase()));
        });
        let events = vec![Event::tag("ns:x"), Event::text("hi"), Event::untag("ns:x")];
        let out: Vec<Event> = transform(events, &transformer).collect();
        assert_eq!(
            out,
            vec![
                Event::mark("section"),
                Event::text("ns:x"),
                Event::text("HI"),
                Event::unmark("section"),
            ]
        );
    }

    #[test]
    fn smoke_test_stray_unmark_is_forwarded() {
        let transformer = build_transformer(|_| {});
        let events = vec![Event::unmark("p")];
        let out: Vec<Event> = transform(events, &transformer).collect();
        assert_eq!(out, vec![Event::unmark("p")]);
    }
}
