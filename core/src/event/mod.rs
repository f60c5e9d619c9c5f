// Core event types for the semantic event stream

pub mod attributes;
pub mod builder;
pub mod json;

pub use attributes::Attributes;
pub use builder::{build_events, build_tag_events, EventBuilder};
pub use json::{events_from_json, events_to_json, from_json, to_json, DecodeError};

use serde::{Deserialize, Serialize};

/// One semantic event. A stream of these is the atomic currency of the
/// whole crate: the parser produces them, the renderer and transformer
/// consume them.
///
/// `Mark`/`Unmark` open and close a named scope; a well-formed stream
/// closes every scope at the same nesting depth it was opened (LIFO).
/// `is_tag` records provenance: `true` for literal namespaced markup in
/// the source (`<ns:name>`), `false` for scopes synthesised from Markdown
/// syntax. `Text` carries raw source characters; no escaping or entity
/// expansion happens here.
///
/// Consumers must not assume one `Text` per source character: runs of
/// plain characters arrive coalesced, and buffer flushes may split a
/// single logical run into several adjacent `Text` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Text {
        text: String,
    },
    Mark {
        name: String,
        #[serde(rename = "isTag", default, skip_serializing_if = "is_false")]
        is_tag: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attributes: Option<Attributes>,
    },
    Unmark {
        name: String,
        #[serde(rename = "isTag", default, skip_serializing_if = "is_false")]
        is_tag: bool,
    },
}

fn is_false(value: &bool) -> bool {
    !value
}

impl Event {
    pub fn text(text: impl Into<String>) -> Self {
        Event::Text { text: text.into() }
    }

    /// A Markdown-synthesised opening mark with no attributes.
    pub fn mark(name: impl Into<String>) -> Self {
        Event::Mark {
            name: name.into(),
            is_tag: false,
            attributes: None,
        }
    }

    /// A Markdown-synthesised opening mark carrying attributes.
    pub fn mark_with(name: impl Into<String>, attributes: Attributes) -> Self {
        Event::Mark {
            name: name.into(),
            is_tag: false,
            attributes: Some(attributes),
        }
    }

    /// An opening mark derived from literal namespaced markup.
    pub fn tag(name: impl Into<String>) -> Self {
        Event::Mark {
            name: name.into(),
            is_tag: true,
            attributes: None,
        }
    }

    pub fn tag_with(name: impl Into<String>, attributes: Attributes) -> Self {
        Event::Mark {
            name: name.into(),
            is_tag: true,
            attributes: Some(attributes),
        }
    }

    pub fn unmark(name: impl Into<String>) -> Self {
        Event::Unmark {
            name: name.into(),
            is_tag: false,
        }
    }

    pub fn untag(name: impl Into<String>) -> Self {
        Event::Unmark {
            name: name.into(),
            is_tag: true,
        }
    }

    /// The scope name for `Mark`/`Unmark`, `None` for `Text`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Event::Text { .. } => None,
            Event::Mark { name, .. } | Event::Unmark { name, .. } => Some(name),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text { .. })
    }

    pub fn is_tag(&self) -> bool {
        match self {
            Event::Text { .. } => false,
            Event::Mark { is_tag, .. } | Event::Unmark { is_tag, .. } => *is_tag,
        }
    }

    /// Attributes of a `Mark`, if any were specified.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Event::Mark { attributes, .. } => attributes.as_ref(),
            _ => None,
        }
    }
}
