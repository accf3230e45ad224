//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve insertion order: the renderer emits strokes before markers,
//!   so paint order is exactly push order and no sort key is needed
//! - keep shape-specific payloads isolated per shape file under
//!   `scene::shapes`
//!
//! The host feeds the recorded list to whatever 2D drawing surface it has;
//! nothing here touches a concrete graphics API.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
