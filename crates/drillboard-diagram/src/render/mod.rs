//! Diagram rendering.
//!
//! One pure function maps a diagram onto a target surface. The live editor
//! canvas, list thumbnails, and modal previews all call it with nothing but
//! a different [`Surface`](crate::coords::Surface), which is the whole
//! resolution-independence guarantee.

mod diagram;

pub use diagram::{render_diagram, MARKER_HALF_SIZE, MARKER_OUTLINE_WIDTH};
