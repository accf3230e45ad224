use serde::{Deserialize, Serialize};

/// Position in the normalized authoring space.
///
/// Both components are fractions of the surface size, so a `Point` carries
/// no pixel resolution. Valid stored points satisfy [`in_unit`](Self::in_unit);
/// boundary code rejects anything else before it reaches a diagram.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Finite and within `[0,1]` on both axes (bounds inclusive).
    #[inline]
    pub fn in_unit(self) -> bool {
        self.is_finite() && (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Euclidean distance in normalized space.
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
