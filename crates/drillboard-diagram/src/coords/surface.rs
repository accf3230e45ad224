use super::{Point, PxPoint};

/// A target rendering surface, in pixels.
///
/// The same diagram maps onto any valid surface: the full editor canvas, a
/// list thumbnail, a modal preview. Geometry is identical up to float
/// rounding at every size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a raw pixel position into normalized space.
    ///
    /// Returns `None` for an invalid surface or a non-finite input; division
    /// by a zero or negative dimension must never leak NaN/Infinity into
    /// stored state.
    #[inline]
    pub fn to_normalized(self, px: f32, py: f32) -> Option<Point> {
        if !self.is_valid() || !px.is_finite() || !py.is_finite() {
            return None;
        }
        Some(Point::new(px / self.width, py / self.height))
    }

    /// Maps a normalized point onto this surface.
    #[inline]
    pub fn to_pixels(self, p: Point) -> PxPoint {
        PxPoint::new(p.x * self.width, p.y * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── validity ──────────────────────────────────────────────────────────

    #[test]
    fn valid_surface() {
        assert!(Surface::new(340.0, 200.0).is_valid());
    }

    #[test]
    fn zero_and_negative_dimensions_invalid() {
        assert!(!Surface::new(0.0, 200.0).is_valid());
        assert!(!Surface::new(340.0, -1.0).is_valid());
    }

    #[test]
    fn non_finite_dimensions_invalid() {
        assert!(!Surface::new(f32::NAN, 200.0).is_valid());
        assert!(!Surface::new(340.0, f32::INFINITY).is_valid());
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn to_normalized_divides_by_size() {
        let s = Surface::new(200.0, 100.0);
        let p = s.to_normalized(50.0, 75.0).unwrap();
        assert_eq!(p, Point::new(0.25, 0.75));
    }

    #[test]
    fn to_pixels_multiplies_by_size() {
        let s = Surface::new(100.0, 70.0);
        let px = s.to_pixels(Point::new(0.1, 0.1));
        assert!((px.x - 10.0).abs() < 1e-5);
        assert!((px.y - 7.0).abs() < 1e-5);
    }

    #[test]
    fn to_normalized_rejects_invalid_surface() {
        assert!(Surface::new(0.0, 100.0).to_normalized(10.0, 10.0).is_none());
    }

    #[test]
    fn to_normalized_rejects_non_finite_input() {
        let s = Surface::new(100.0, 100.0);
        assert!(s.to_normalized(f32::NAN, 10.0).is_none());
    }

    #[test]
    fn round_trip_recovers_normalized_position() {
        let s = Surface::new(340.0, 200.0);
        let p = Point::new(0.31, 0.62);
        let px = s.to_pixels(p);
        let back = s.to_normalized(px.x, px.y).unwrap();
        assert!((back.x - p.x).abs() < 1e-6);
        assert!((back.y - p.y).abs() < 1e-6);
    }
}
