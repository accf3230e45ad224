/// Position on a concrete rendering surface, in pixels (top-left origin).
///
/// Produced by [`Surface::to_pixels`](super::Surface::to_pixels); only draw
/// primitives carry these.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PxPoint {
    pub x: f32,
    pub y: f32,
}

impl PxPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
