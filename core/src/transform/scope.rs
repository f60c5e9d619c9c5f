// Handler scope: the output DSL available inside a transformer rule

use crate::event::{Attributes, Event};

/// Recorded output operation. `Children` marks the point where the
/// matched element's original children splice into the output.
pub(crate) enum Op {
    Emit(Event),
    Children(Option<String>),
}

/// Output scope passed to rule handlers.
///
/// Everything emitted before [`Scope::children`] replaces the matched
/// opening mark; everything after it is held back until the matching
/// close arrives, so a handler can wrap prefix and suffix around the
/// element's content.
pub struct Scope {
    ops: Vec<Op>,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub(crate) fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Emit text into the output stream.
    pub fn text(&mut self, text: impl Into<String>) {
        self.ops.push(Op::Emit(Event::text(text)));
    }

    /// Emit a balanced `Mark`/`Unmark` pair around a nested handler
    /// block.
    pub fn mark(&mut self, name: impl Into<String>, f: impl FnOnce(&mut Self)) {
        let name = name.into();
        self.ops.push(Op::Emit(Event::mark(name.clone())));
        f(self);
        self.ops.push(Op::Emit(Event::unmark(name)));
    }

    pub fn mark_with(
        &mut self,
        name: impl Into<String>,
        attributes: Attributes,
        f: impl FnOnce(&mut Self),
    ) {
        let name = name.into();
        self.ops.push(Op::Emit(Event::mark_with(name.clone(), attributes)));
        f(self);
        self.ops.push(Op::Emit(Event::unmark(name)));
    }

    /// Splice the matched element's children here, tagging the descent
    /// with `mode` for rule scoping.
    pub fn children(&mut self, mode: Option<&str>) {
        self.ops.push(Op::Children(mode.map(str::to_string)));
    }
}
