use crate::coords::PxPoint;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Polyline draw payload: a connected line through `points` in order.
///
/// Always carries at least two points; one-point strokes are recorded as
/// [`DotCmd`](super::DotCmd) instead. Hosts should draw with round caps and
/// joins so dense freehand paths read as one continuous line.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<PxPoint>,
    /// Line width in pixels.
    pub width: f32,
    pub color: Color,
}

impl PolylineCmd {
    #[inline]
    pub fn new(points: Vec<PxPoint>, width: f32, color: Color) -> Self {
        Self { points, width, color }
    }
}

impl DrawList {
    /// Records a polyline draw command.
    #[inline]
    pub fn push_polyline(&mut self, points: Vec<PxPoint>, width: f32, color: Color) {
        self.push(DrawCmd::Polyline(PolylineCmd::new(points, width, color)));
    }
}
