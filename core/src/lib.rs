// Markstream Core Library - streaming Markdown + namespaced markup parser
// emitting semantic events

// Core modules: grammar → parser → events → render/transform/extract
pub mod event;
pub mod extract;
pub mod grammar;
pub mod parser;
pub mod render;
pub mod testing;
pub mod transform;

// Re-export main API
pub use event::{build_events, build_tag_events, Attributes, Event, EventBuilder};
pub use event::{events_from_json, events_to_json, from_json, to_json, DecodeError};
pub use extract::{extract, MarkupContentExtractor};
pub use parser::{parse, parse_str, Events, Parser};
pub use render::{render, render_with, RenderOptions};
pub use transform::{build_transformer, transform, Scope, Transformer, TransformerBuilder};
