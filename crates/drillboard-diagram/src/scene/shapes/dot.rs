use crate::coords::PxPoint;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled dot draw payload.
///
/// Emitted for a stroke whose gesture never moved past the sampling
/// threshold: one stored point renders as a single dot rather than nothing
/// or an error.
#[derive(Debug, Clone, PartialEq)]
pub struct DotCmd {
    pub center: PxPoint,
    /// Radius in pixels (half the stroke's pen size).
    pub radius: f32,
    pub color: Color,
}

impl DotCmd {
    #[inline]
    pub fn new(center: PxPoint, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records a dot draw command.
    #[inline]
    pub fn push_dot(&mut self, center: PxPoint, radius: f32, color: Color) {
        self.push(DrawCmd::Dot(DotCmd::new(center, radius, color)));
    }
}
