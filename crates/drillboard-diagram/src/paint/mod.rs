//! Color types and the fixed drill palette.
//!
//! The core is agnostic to the host's drawing API, so colors stay in a
//! plain straight-alpha form the host can convert however it likes.

mod color;
mod palette;

pub use color::Color;
pub use palette::{marker_fill, INK, MARKER_BLUE, MARKER_RED, MARKER_YELLOW};
