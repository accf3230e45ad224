use crate::coords::PxPoint;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Cone marker glyph payload: an upright isosceles triangle centered on the
/// marker position, filled and outlined.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeGlyphCmd {
    pub center: PxPoint,
    /// Half the triangle's extent in pixels (apex is `half_size` above the
    /// center, base corners `half_size` below and to each side).
    pub half_size: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_width: f32,
}

impl ConeGlyphCmd {
    #[inline]
    pub fn new(
        center: PxPoint,
        half_size: f32,
        fill: Color,
        outline: Color,
        outline_width: f32,
    ) -> Self {
        Self { center, half_size, fill, outline, outline_width }
    }

    /// Triangle vertices in pixels: apex, base-left, base-right.
    pub fn vertices(&self) -> [PxPoint; 3] {
        let PxPoint { x, y } = self.center;
        let s = self.half_size;
        [
            PxPoint::new(x, y - s),
            PxPoint::new(x - s, y + s),
            PxPoint::new(x + s, y + s),
        ]
    }
}

impl DrawList {
    /// Records a cone glyph draw command.
    #[inline]
    pub fn push_cone_glyph(
        &mut self,
        center: PxPoint,
        half_size: f32,
        fill: Color,
        outline: Color,
        outline_width: f32,
    ) {
        self.push(DrawCmd::ConeGlyph(ConeGlyphCmd::new(
            center,
            half_size,
            fill,
            outline,
            outline_width,
        )));
    }
}
