//! Coordinate types shared by the editor and every rendering surface.
//!
//! Canonical authoring space:
//! - Normalized `[0,1] × [0,1]`
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel positions exist only at the edges: raw pointer input is normalized
//! on the way in, and draw primitives are produced in pixels on the way out.
//! Everything stored in a diagram is resolution-independent.

mod point;
mod px;
mod surface;

pub use point::Point;
pub use px::PxPoint;
pub use surface::Surface;
