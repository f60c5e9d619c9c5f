// Side-observer capturing one occurrence of a named tag

use crate::event::{Attributes, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractState {
    Idle,
    Extracting,
    Done,
}

/// Observes a stream and captures the first occurrence of the target tag:
/// its attributes, the events from the opening `Mark` through the closing
/// `Unmark` inclusive, and the concatenated text content between them.
/// Later occurrences are ignored; the observed stream itself is passed
/// through untouched.
pub struct MarkupContentExtractor {
    target: String,
    state: ExtractState,
    events: Vec<Event>,
    attributes: Option<Attributes>,
    content: String,
}

impl MarkupContentExtractor {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            state: ExtractState::Idle,
            events: Vec::new(),
            attributes: None,
            content: String::new(),
        }
    }

    pub fn is_extracting(&self) -> bool {
        self.state == ExtractState::Extracting
    }

    /// Whether a complete occurrence was captured.
    pub fn succeeded(&self) -> bool {
        self.state == ExtractState::Done
    }

    pub fn extracted_events(&self) -> &[Event] {
        &self.events
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn observe(&mut self, event: &Event) {
        match self.state {
            ExtractState::Done => {}
            ExtractState::Idle => {
                if let Event::Mark {
                    name, attributes, ..
                } = event
                {
                    if *name == self.target {
                        self.attributes = attributes.clone();
                        self.events.push(event.clone());
                        self.state = ExtractState::Extracting;
                    }
                }
            }
            ExtractState::Extracting => {
                self.events.push(event.clone());
                match event {
                    Event::Text { text } => self.content.push_str(text),
                    Event::Unmark { name, .. } if *name == self.target => {
                        self.state = ExtractState::Done;
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Attach an extractor to a stream. The returned iterator yields every
/// input event unchanged while the extractor observes them on the side.
pub fn extract<I>(events: I, extractor: &mut MarkupContentExtractor) -> Extracted<'_, I::IntoIter>
where
    I: IntoIterator<Item = Event>,
{
    Extracted {
        input: events.into_iter(),
        extractor,
    }
}

/// Pass-through stream with an attached extractor. See [`extract`].
pub struct Extracted<'a, I>
where
    I: Iterator<Item = Event>,
{
    input: I,
    extractor: &'a mut MarkupContentExtractor,
}

impl<'a, I> Iterator for Extracted<'a, I>
where
    I: Iterator<Item = Event>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let event = self.input.next()?;
        self.extractor.observe(&event);
        Some(event)
    }
}
