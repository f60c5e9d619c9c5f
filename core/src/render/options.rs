// Render options

/// Output tuning for the pretty printer. The defaults match the
/// canonical two-space style.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}
