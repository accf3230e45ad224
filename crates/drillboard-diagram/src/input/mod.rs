//! Pointer input handling for an authoring session.
//!
//! Responsibilities:
//! - describe the raw pointer events supplied by the host shell
//! - arbitrate drag vs. tap with a small state machine (the two recognizers
//!   are mutually exclusive for a given touch sequence)
//! - thin a dense gesture stream into a bounded point sequence
//!
//! Everything here is single-threaded and synchronous: one gesture stream
//! is active at a time and mutation happens inside the event call.

mod gesture;
mod sampler;
mod types;

pub use gesture::{GestureAction, GestureRecognizer, GestureState};
pub use sampler::{SamplerConfig, MIN_SAMPLE_DISTANCE};
pub use types::{PointerEvent, PointerPhase};
