// Scoped builder producing event sequences for tests and composition

use super::{Attributes, Event};

/// Builds an event sequence through a scoped DSL.
///
/// The unqualified primitives (`mark`, `unmark`, `scope`, `scope_with`)
/// emit with the builder's default `is_tag`, chosen at construction;
/// `tag`/`tag_with` always emit markup-flavoured scopes. Scoped calls
/// guarantee the closing `Unmark` matches the opening `Mark`, so builder
/// programs cannot produce unbalanced streams by accident.
pub struct EventBuilder {
    events: Vec<Event>,
    produce_tags: bool,
}

impl EventBuilder {
    fn new(produce_tags: bool) -> Self {
        Self {
            events: Vec::new(),
            produce_tags,
        }
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.events.push(Event::text(text));
    }

    /// Raw opening mark using the builder's default `is_tag`.
    pub fn mark(&mut self, name: impl Into<String>) {
        self.events.push(Event::Mark {
            name: name.into(),
            is_tag: self.produce_tags,
            attributes: None,
        });
    }

    pub fn mark_with(&mut self, name: impl Into<String>, attributes: Attributes) {
        self.events.push(Event::Mark {
            name: name.into(),
            is_tag: self.produce_tags,
            attributes: Some(attributes),
        });
    }

    /// Raw closing mark using the builder's default `is_tag`.
    pub fn unmark(&mut self, name: impl Into<String>) {
        self.events.push(Event::Unmark {
            name: name.into(),
            is_tag: self.produce_tags,
        });
    }

    /// Balanced scope: `Mark(name)`, the block, `Unmark(name)`.
    pub fn scope(&mut self, name: impl Into<String>, f: impl FnOnce(&mut Self)) {
        let name = name.into();
        self.mark(name.clone());
        f(self);
        self.unmark(name);
    }

    pub fn scope_with(
        &mut self,
        name: impl Into<String>,
        attributes: Attributes,
        f: impl FnOnce(&mut Self),
    ) {
        let name = name.into();
        self.mark_with(name.clone(), attributes);
        f(self);
        self.unmark(name);
    }

    /// Balanced markup scope, `is_tag = true` regardless of the default.
    pub fn tag(&mut self, name: impl Into<String>, f: impl FnOnce(&mut Self)) {
        let name = name.into();
        self.events.push(Event::tag(name.clone()));
        f(self);
        self.events.push(Event::untag(name));
    }

    pub fn tag_with(
        &mut self,
        name: impl Into<String>,
        attributes: Attributes,
        f: impl FnOnce(&mut Self),
    ) {
        let name = name.into();
        self.events.push(Event::tag_with(name.clone(), attributes));
        f(self);
        self.events.push(Event::untag(name));
    }
}

/// Run a builder program with Markdown-flavoured defaults (`is_tag = false`).
pub fn build_events(f: impl FnOnce(&mut EventBuilder)) -> Vec<Event> {
    let mut builder = EventBuilder::new(false);
    f(&mut builder);
    builder.events
}

/// Run a builder program with markup-flavoured defaults (`is_tag = true`).
pub fn build_tag_events(f: impl FnOnce(&mut EventBuilder)) -> Vec<Event> {
    let mut builder = EventBuilder::new(true);
    f(&mut builder);
    builder.events
}
