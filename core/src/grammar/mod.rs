// Grammar layer: complete-pattern recognizers consulted by the streaming
// state machine at its decision points. The parser owns all incremental
// buffering; these functions only ever see a finished candidate slice.

pub mod autolink;
pub mod block;
pub mod tag;

pub use autolink::{classify_autolink, Autolink};
pub use block::{fence_open, math_fence, ordered_marker, table_separator, thematic_break};
pub use tag::open_tag;
