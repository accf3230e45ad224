//! Drill diagram engine.
//!
//! This crate owns the vector diagram core used to capture and redisplay
//! coaching drill diagrams: freehand strokes plus colored cone markers,
//! authored in a normalized coordinate space and replayed identically on
//! rendering surfaces of any pixel size (full editor canvas, list
//! thumbnails, modal previews).
//!
//! The surrounding application (drill records, sessions, navigation) lives
//! elsewhere and only produces or consumes the [`Diagram`](diagram::Diagram)
//! value defined here.

pub mod coords;
pub mod diagram;
pub mod editor;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
