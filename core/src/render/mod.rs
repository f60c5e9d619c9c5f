// Renderer: event stream → indented HTML-like text

pub mod escape;
pub mod html;
pub mod options;

pub use html::{render, render_with};
pub use options::RenderOptions;
